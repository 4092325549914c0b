// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Developer catalog: public localized listing plus staff CRUD.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use aqar_common_i18n::{resolve_field, Locale};
use aqar_server_db::Developer;

use crate::{api::AppState, auth_middleware::StaffAuth, error::ServerError, locale::RequestLocale};

#[derive(Debug, Serialize, ToSchema)]
pub struct LocalizedDeveloper {
	pub id: String,
	pub name: String,
	pub description: Option<String>,
	pub logo_url: Option<String>,
	pub created_at: String,
}

impl LocalizedDeveloper {
	fn from_developer(developer: Developer, locale: Locale) -> Self {
		let description = resolve_field(
			developer.description.as_deref(),
			developer.description_en.as_deref(),
			locale,
		);
		Self {
			id: developer.id,
			name: resolve_field(Some(&developer.name), developer.name_en.as_deref(), locale),
			description: (!description.is_empty()).then_some(description),
			logo_url: developer.logo_url,
			created_at: developer.created_at.to_rfc3339(),
		}
	}
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeveloperPayload {
	pub name: String,
	pub name_en: Option<String>,
	pub description: Option<String>,
	pub description_en: Option<String>,
	pub logo_url: Option<String>,
}

impl DeveloperPayload {
	fn validate(&self) -> Result<(), ServerError> {
		if self.name.trim().is_empty() {
			return Err(ServerError::BadRequest("name is required".to_string()));
		}
		Ok(())
	}
}

#[utoipa::path(
    get,
    path = "/api/developers",
    params(("lang" = Option<String>, Query, description = "Response locale: ar (default) or en")),
    responses(
        (status = 200, description = "All developers", body = Vec<LocalizedDeveloper>)
    ),
    tag = "catalog"
)]
/// GET /api/developers - Localized developer listing.
pub async fn list_developers(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
) -> Result<Json<Vec<LocalizedDeveloper>>, ServerError> {
	let developers = state.developers.list().await?;
	Ok(Json(
		developers
			.into_iter()
			.map(|d| LocalizedDeveloper::from_developer(d, locale))
			.collect(),
	))
}

#[utoipa::path(
    get,
    path = "/api/developers/{id}",
    params(
        ("id" = String, Path, description = "Developer ID"),
        ("lang" = Option<String>, Query, description = "Response locale: ar (default) or en")
    ),
    responses(
        (status = 200, description = "Developer detail", body = LocalizedDeveloper),
        (status = 404, description = "No such developer", body = crate::error::ErrorResponse)
    ),
    tag = "catalog"
)]
/// GET /api/developers/{id} - Localized developer detail.
pub async fn get_developer(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Path(id): Path<String>,
) -> Result<Json<LocalizedDeveloper>, ServerError> {
	let developer = state
		.developers
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id))?;
	Ok(Json(LocalizedDeveloper::from_developer(developer, locale)))
}

#[utoipa::path(
    post,
    path = "/api/developers",
    request_body = DeveloperPayload,
    responses(
        (status = 201, description = "Developer created"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "catalog-admin"
)]
/// POST /api/developers - Create a developer (admin).
#[tracing::instrument(skip(state, auth, payload))]
pub async fn create_developer(
	State(state): State<AppState>,
	auth: StaffAuth,
	Json(payload): Json<DeveloperPayload>,
) -> Result<(StatusCode, Json<Developer>), ServerError> {
	auth.require_admin()?;
	payload.validate()?;

	let now = Utc::now();
	let developer = Developer {
		id: Uuid::new_v4().to_string(),
		name: payload.name,
		name_en: payload.name_en,
		description: payload.description,
		description_en: payload.description_en,
		logo_url: payload.logo_url,
		created_at: now,
		updated_at: now,
	};

	state.developers.create(&developer).await?;
	tracing::info!(developer_id = %developer.id, "developer created");
	Ok((StatusCode::CREATED, Json(developer)))
}

#[utoipa::path(
    put,
    path = "/api/developers/{id}",
    params(("id" = String, Path, description = "Developer ID")),
    request_body = DeveloperPayload,
    responses(
        (status = 200, description = "Developer updated"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse),
        (status = 404, description = "No such developer", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "catalog-admin"
)]
/// PUT /api/developers/{id} - Replace a developer (admin).
#[tracing::instrument(skip(state, auth, payload))]
pub async fn update_developer(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
	Json(payload): Json<DeveloperPayload>,
) -> Result<Json<Developer>, ServerError> {
	auth.require_admin()?;
	payload.validate()?;

	let existing = state
		.developers
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id.clone()))?;

	let developer = Developer {
		id,
		name: payload.name,
		name_en: payload.name_en,
		description: payload.description,
		description_en: payload.description_en,
		logo_url: payload.logo_url,
		created_at: existing.created_at,
		updated_at: Utc::now(),
	};

	state.developers.update(&developer).await?;
	Ok(Json(developer))
}

#[utoipa::path(
    delete,
    path = "/api/developers/{id}",
    params(("id" = String, Path, description = "Developer ID")),
    responses(
        (status = 204, description = "Developer deleted"),
        (status = 404, description = "No such developer", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "catalog-admin"
)]
/// DELETE /api/developers/{id} - Remove a developer (admin).
#[tracing::instrument(skip(state, auth))]
pub async fn delete_developer(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
	auth.require_admin()?;

	if state.developers.delete(&id).await? {
		tracing::info!(developer_id = %id, "developer deleted");
		Ok(StatusCode::NO_CONTENT)
	} else {
		Err(ServerError::NotFound(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_localization_falls_back_to_arabic_name() {
		let now = Utc::now();
		let developer = Developer {
			id: "d-1".to_string(),
			name: "شركة التطوير".to_string(),
			name_en: None,
			description: None,
			description_en: None,
			logo_url: None,
			created_at: now,
			updated_at: now,
		};

		let localized = LocalizedDeveloper::from_developer(developer, Locale::En);
		assert_eq!(localized.name, "شركة التطوير");
		assert!(localized.description.is_none());
	}
}
