// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Staff unit management.
//!
//! Payloads carry both language variants explicitly; the public search
//! surface does the collapsing. Every mutation is admin-only; any staff
//! role may read the raw bilingual records.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use aqar_server_db::Unit;

use crate::{api::AppState, auth_middleware::StaffAuth, error::ServerError};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnitPayload {
	pub title: String,
	pub title_en: Option<String>,
	pub unit_type: String,
	pub unit_type_en: Option<String>,
	pub region: String,
	pub region_en: Option<String>,
	pub project: String,
	pub project_en: Option<String>,
	pub project_id: Option<String>,
	pub area: f64,
	pub bedrooms: i64,
	pub bathrooms: i64,
	pub price: f64,
	pub description: Option<String>,
	pub description_en: Option<String>,
	#[serde(default)]
	pub image_urls: Vec<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
}

impl UnitPayload {
	fn validate(&self) -> Result<(), ServerError> {
		if self.title.trim().is_empty() {
			return Err(ServerError::BadRequest("title is required".to_string()));
		}
		if !(self.area.is_finite() && self.area >= 0.0) {
			return Err(ServerError::BadRequest(
				"area must be a non-negative number".to_string(),
			));
		}
		if !(self.price.is_finite() && self.price >= 0.0) {
			return Err(ServerError::BadRequest(
				"price must be a non-negative number".to_string(),
			));
		}
		if self.bedrooms < 0 || self.bathrooms < 0 {
			return Err(ServerError::BadRequest(
				"bedrooms and bathrooms must be non-negative".to_string(),
			));
		}
		Ok(())
	}
}

#[utoipa::path(
    post,
    path = "/api/units",
    request_body = UnitPayload,
    responses(
        (status = 201, description = "Unit created"),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "inventory-admin"
)]
/// POST /api/units - Create a unit (admin).
#[tracing::instrument(skip(state, auth, payload))]
pub async fn create_unit(
	State(state): State<AppState>,
	auth: StaffAuth,
	Json(payload): Json<UnitPayload>,
) -> Result<(StatusCode, Json<Unit>), ServerError> {
	auth.require_admin()?;
	payload.validate()?;

	let now = Utc::now();
	let unit = Unit {
		id: Uuid::new_v4().to_string(),
		title: payload.title,
		title_en: payload.title_en,
		unit_type: payload.unit_type,
		unit_type_en: payload.unit_type_en,
		region: payload.region,
		region_en: payload.region_en,
		project: payload.project,
		project_en: payload.project_en,
		project_id: payload.project_id,
		area: payload.area,
		bedrooms: payload.bedrooms,
		bathrooms: payload.bathrooms,
		price: payload.price,
		description: payload.description,
		description_en: payload.description_en,
		image_urls: payload.image_urls,
		latitude: payload.latitude,
		longitude: payload.longitude,
		created_at: now,
		updated_at: now,
	};

	state.units.create(&unit).await?;
	tracing::info!(unit_id = %unit.id, "unit created");
	Ok((StatusCode::CREATED, Json(unit)))
}

#[utoipa::path(
    put,
    path = "/api/units/{id}",
    params(("id" = String, Path, description = "Unit ID")),
    request_body = UnitPayload,
    responses(
        (status = 200, description = "Unit updated"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse),
        (status = 404, description = "No such unit", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "inventory-admin"
)]
/// PUT /api/units/{id} - Replace a unit (admin).
#[tracing::instrument(skip(state, auth, payload))]
pub async fn update_unit(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
	Json(payload): Json<UnitPayload>,
) -> Result<Json<Unit>, ServerError> {
	auth.require_admin()?;
	payload.validate()?;

	let existing = state
		.units
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id.clone()))?;

	let unit = Unit {
		id,
		title: payload.title,
		title_en: payload.title_en,
		unit_type: payload.unit_type,
		unit_type_en: payload.unit_type_en,
		region: payload.region,
		region_en: payload.region_en,
		project: payload.project,
		project_en: payload.project_en,
		project_id: payload.project_id,
		area: payload.area,
		bedrooms: payload.bedrooms,
		bathrooms: payload.bathrooms,
		price: payload.price,
		description: payload.description,
		description_en: payload.description_en,
		image_urls: payload.image_urls,
		latitude: payload.latitude,
		longitude: payload.longitude,
		created_at: existing.created_at,
		updated_at: Utc::now(),
	};

	state.units.update(&unit).await?;
	Ok(Json(unit))
}

#[utoipa::path(
    delete,
    path = "/api/units/{id}",
    params(("id" = String, Path, description = "Unit ID")),
    responses(
        (status = 204, description = "Unit deleted"),
        (status = 404, description = "No such unit", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "inventory-admin"
)]
/// DELETE /api/units/{id} - Remove a unit (admin).
#[tracing::instrument(skip(state, auth))]
pub async fn delete_unit(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
	auth.require_admin()?;

	if state.units.delete(&id).await? {
		tracing::info!(unit_id = %id, "unit deleted");
		Ok(StatusCode::NO_CONTENT)
	} else {
		Err(ServerError::NotFound(id))
	}
}

#[utoipa::path(
    get,
    path = "/api/admin/units/{id}",
    params(("id" = String, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Raw bilingual unit record for edit forms"),
        (status = 404, description = "No such unit", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "inventory-admin"
)]
/// GET /api/admin/units/{id} - Raw record with both language variants.
pub async fn get_unit_raw(
	State(state): State<AppState>,
	_auth: StaffAuth,
	Path(id): Path<String>,
) -> Result<Json<Unit>, ServerError> {
	let unit = state
		.units
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id))?;
	Ok(Json(unit))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::create_app_state;
	use aqar_server_db::testing::create_test_pool;
	use aqar_server_db::{ROLE_ADMIN, ROLE_SALES};

	fn valid_payload() -> UnitPayload {
		UnitPayload {
			title: "شقة".to_string(),
			title_en: None,
			unit_type: "apartment".to_string(),
			unit_type_en: None,
			region: "القاهرة".to_string(),
			region_en: None,
			project: "لوتس".to_string(),
			project_en: None,
			project_id: None,
			area: 120.0,
			bedrooms: 2,
			bathrooms: 1,
			price: 1_000_000.0,
			description: None,
			description_en: None,
			image_urls: vec![],
			latitude: None,
			longitude: None,
		}
	}

	#[test]
	fn test_payload_validation() {
		assert!(valid_payload().validate().is_ok());

		let mut empty_title = valid_payload();
		empty_title.title = "  ".to_string();
		assert!(empty_title.validate().is_err());

		let mut negative_price = valid_payload();
		negative_price.price = -1.0;
		assert!(negative_price.validate().is_err());

		let mut nan_area = valid_payload();
		nan_area.area = f64::NAN;
		assert!(nan_area.validate().is_err());
	}

	#[tokio::test]
	async fn test_create_unit_with_unknown_project_is_bad_request() {
		let state = create_app_state(create_test_pool().await);
		let auth = StaffAuth {
			role: ROLE_ADMIN.to_string(),
		};
		let mut payload = valid_payload();
		payload.project_id = Some("no-such-project".to_string());

		let err = create_unit(State(state), auth, Json(payload))
			.await
			.unwrap_err();
		assert!(matches!(err, ServerError::BadRequest(_)));
	}

	#[tokio::test]
	async fn test_update_unit_requires_admin_role() {
		let state = create_app_state(create_test_pool().await);
		let auth = StaffAuth {
			role: ROLE_SALES.to_string(),
		};

		let err = update_unit(
			State(state),
			auth,
			Path("u-1".to_string()),
			Json(valid_payload()),
		)
		.await
		.unwrap_err();
		assert!(matches!(err, ServerError::Forbidden));
	}
}
