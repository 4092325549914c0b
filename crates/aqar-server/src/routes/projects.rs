// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project catalog: public localized listing (map page) plus staff CRUD.

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use aqar_common_i18n::{resolve_field, Locale};
use aqar_server_db::Project;

use crate::{api::AppState, auth_middleware::StaffAuth, error::ServerError, locale::RequestLocale};

#[derive(Debug, Serialize, ToSchema)]
pub struct LocalizedProject {
	pub id: String,
	pub developer_id: Option<String>,
	pub name: String,
	pub region: String,
	pub description: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub image_urls: Vec<String>,
	pub created_at: String,
}

impl LocalizedProject {
	fn from_project(project: Project, locale: Locale) -> Self {
		let description = resolve_field(
			project.description.as_deref(),
			project.description_en.as_deref(),
			locale,
		);
		Self {
			id: project.id,
			developer_id: project.developer_id,
			name: resolve_field(Some(&project.name), project.name_en.as_deref(), locale),
			region: resolve_field(Some(&project.region), project.region_en.as_deref(), locale),
			description: (!description.is_empty()).then_some(description),
			latitude: project.latitude,
			longitude: project.longitude,
			image_urls: project.image_urls,
			created_at: project.created_at.to_rfc3339(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
	/// Scope the listing to one developer.
	#[serde(rename = "developerId")]
	pub developer_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectPayload {
	pub developer_id: Option<String>,
	pub name: String,
	pub name_en: Option<String>,
	pub region: String,
	pub region_en: Option<String>,
	pub description: Option<String>,
	pub description_en: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	#[serde(default)]
	pub image_urls: Vec<String>,
}

impl ProjectPayload {
	fn validate(&self) -> Result<(), ServerError> {
		if self.name.trim().is_empty() {
			return Err(ServerError::BadRequest("name is required".to_string()));
		}
		Ok(())
	}
}

#[utoipa::path(
    get,
    path = "/api/projects",
    params(
        ("developerId" = Option<String>, Query, description = "Scope to one developer"),
        ("lang" = Option<String>, Query, description = "Response locale: ar (default) or en")
    ),
    responses(
        (status = 200, description = "Projects with coordinates for the map page", body = Vec<LocalizedProject>)
    ),
    tag = "catalog"
)]
/// GET /api/projects - Localized project listing.
pub async fn list_projects(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<LocalizedProject>>, ServerError> {
	let projects = state.projects.list(query.developer_id.as_deref()).await?;
	Ok(Json(
		projects
			.into_iter()
			.map(|p| LocalizedProject::from_project(p, locale))
			.collect(),
	))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID"),
        ("lang" = Option<String>, Query, description = "Response locale: ar (default) or en")
    ),
    responses(
        (status = 200, description = "Project detail", body = LocalizedProject),
        (status = 404, description = "No such project", body = crate::error::ErrorResponse)
    ),
    tag = "catalog"
)]
/// GET /api/projects/{id} - Localized project detail.
pub async fn get_project(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Path(id): Path<String>,
) -> Result<Json<LocalizedProject>, ServerError> {
	let project = state
		.projects
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id))?;
	Ok(Json(LocalizedProject::from_project(project, locale)))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "catalog-admin"
)]
/// POST /api/projects - Create a project (admin).
#[tracing::instrument(skip(state, auth, payload))]
pub async fn create_project(
	State(state): State<AppState>,
	auth: StaffAuth,
	Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>), ServerError> {
	auth.require_admin()?;
	payload.validate()?;

	let now = Utc::now();
	let project = Project {
		id: Uuid::new_v4().to_string(),
		developer_id: payload.developer_id,
		name: payload.name,
		name_en: payload.name_en,
		region: payload.region,
		region_en: payload.region_en,
		description: payload.description,
		description_en: payload.description_en,
		latitude: payload.latitude,
		longitude: payload.longitude,
		image_urls: payload.image_urls,
		created_at: now,
		updated_at: now,
	};

	state.projects.create(&project).await?;
	tracing::info!(project_id = %project.id, "project created");
	Ok((StatusCode::CREATED, Json(project)))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Project updated"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse),
        (status = 404, description = "No such project", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "catalog-admin"
)]
/// PUT /api/projects/{id} - Replace a project (admin).
#[tracing::instrument(skip(state, auth, payload))]
pub async fn update_project(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
	Json(payload): Json<ProjectPayload>,
) -> Result<Json<Project>, ServerError> {
	auth.require_admin()?;
	payload.validate()?;

	let existing = state
		.projects
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id.clone()))?;

	let project = Project {
		id,
		developer_id: payload.developer_id,
		name: payload.name,
		name_en: payload.name_en,
		region: payload.region,
		region_en: payload.region_en,
		description: payload.description,
		description_en: payload.description_en,
		latitude: payload.latitude,
		longitude: payload.longitude,
		image_urls: payload.image_urls,
		created_at: existing.created_at,
		updated_at: Utc::now(),
	};

	state.projects.update(&project).await?;
	Ok(Json(project))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "No such project", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "catalog-admin"
)]
/// DELETE /api/projects/{id} - Remove a project (admin).
#[tracing::instrument(skip(state, auth))]
pub async fn delete_project(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
	auth.require_admin()?;

	if state.projects.delete(&id).await? {
		tracing::info!(project_id = %id, "project deleted");
		Ok(StatusCode::NO_CONTENT)
	} else {
		Err(ServerError::NotFound(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::create_app_state;
	use aqar_server_db::testing::create_test_pool;
	use aqar_server_db::ROLE_ADMIN;

	#[test]
	fn test_localized_project_keeps_coordinates() {
		let now = Utc::now();
		let project = Project {
			id: "p-1".to_string(),
			developer_id: None,
			name: "مشروع".to_string(),
			name_en: Some("Project".to_string()),
			region: "الساحل".to_string(),
			region_en: None,
			description: None,
			description_en: None,
			latitude: Some(30.05),
			longitude: Some(31.23),
			image_urls: vec![],
			created_at: now,
			updated_at: now,
		};

		let localized = LocalizedProject::from_project(project, Locale::En);
		assert_eq!(localized.name, "Project");
		assert_eq!(localized.region, "الساحل");
		assert_eq!(localized.latitude, Some(30.05));
	}

	#[tokio::test]
	async fn test_create_project_with_unknown_developer_is_bad_request() {
		let state = create_app_state(create_test_pool().await);
		let auth = StaffAuth {
			role: ROLE_ADMIN.to_string(),
		};
		let payload = ProjectPayload {
			developer_id: Some("no-such-developer".to_string()),
			name: "مشروع".to_string(),
			name_en: None,
			region: "الساحل".to_string(),
			region_en: None,
			description: None,
			description_en: None,
			latitude: None,
			longitude: None,
			image_urls: vec![],
		};

		let err = create_project(State(state), auth, Json(payload))
			.await
			.unwrap_err();
		assert!(matches!(err, ServerError::BadRequest(_)));
	}
}
