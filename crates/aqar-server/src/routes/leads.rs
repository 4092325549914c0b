// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lead capture: consultation requests and visitor reviews.
//!
//! Submission endpoints are public. Listing consultations and moderating
//! reviews is staff-only; reviews only reach the public site once approved.

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use aqar_inventory_core::{Pagination, DEFAULT_LIMIT, MAX_LIMIT};
use aqar_server_db::{Consultation, Review};

use crate::{api::AppState, auth_middleware::StaffAuth, error::ServerError};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConsultationPayload {
	pub name: String,
	pub phone: String,
	pub email: Option<String>,
	pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConsultationCreated {
	pub id: String,
}

#[utoipa::path(
    post,
    path = "/api/consultations",
    request_body = ConsultationPayload,
    responses(
        (status = 201, description = "Consultation request captured", body = ConsultationCreated),
        (status = 400, description = "Missing name or phone", body = crate::error::ErrorResponse)
    ),
    tag = "leads"
)]
/// POST /api/consultations - Capture a consultation request from the site.
#[tracing::instrument(skip(state, payload))]
pub async fn create_consultation(
	State(state): State<AppState>,
	Json(payload): Json<ConsultationPayload>,
) -> Result<(StatusCode, Json<ConsultationCreated>), ServerError> {
	if payload.name.trim().is_empty() || payload.phone.trim().is_empty() {
		return Err(ServerError::BadRequest(
			"name and phone are required".to_string(),
		));
	}

	let consultation = Consultation {
		id: Uuid::new_v4().to_string(),
		name: payload.name,
		phone: payload.phone,
		email: payload.email,
		message: payload.message,
		created_at: Utc::now(),
	};

	state.leads.create_consultation(&consultation).await?;
	tracing::info!(consultation_id = %consultation.id, "consultation captured");
	Ok((
		StatusCode::CREATED,
		Json(ConsultationCreated {
			id: consultation.id,
		}),
	))
}

#[derive(Debug, Deserialize)]
pub struct ConsultationListQuery {
	pub page: Option<u32>,
	pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConsultationListResponse {
	pub data: Vec<Consultation>,
	pub pagination: Pagination,
}

#[utoipa::path(
    get,
    path = "/api/admin/consultations",
    params(
        ("page" = Option<u32>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u32>, Query, description = "Page size (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Consultations, newest first", body = ConsultationListResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "leads-admin"
)]
/// GET /api/admin/consultations - Paginated consultation inbox.
#[tracing::instrument(skip(state, _auth))]
pub async fn list_consultations(
	State(state): State<AppState>,
	_auth: StaffAuth,
	Query(query): Query<ConsultationListQuery>,
) -> Result<Json<ConsultationListResponse>, ServerError> {
	let page = query.page.unwrap_or(1).max(1);
	let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
	let offset = i64::from(page - 1) * i64::from(limit);

	let (consultations, total) = state
		.leads
		.list_consultations(i64::from(limit), offset)
		.await?;

	Ok(Json(ConsultationListResponse {
		data: consultations,
		pagination: Pagination::new(page, limit, total.max(0) as u64),
	}))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewPayload {
	pub name: String,
	pub rating: i64,
	pub comment: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewCreated {
	pub id: String,
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = ReviewPayload,
    responses(
        (status = 201, description = "Review submitted, pending approval", body = ReviewCreated),
        (status = 400, description = "Invalid rating or missing name", body = crate::error::ErrorResponse)
    ),
    tag = "leads"
)]
/// POST /api/reviews - Submit a visitor review. Hidden until approved.
#[tracing::instrument(skip(state, payload))]
pub async fn create_review(
	State(state): State<AppState>,
	Json(payload): Json<ReviewPayload>,
) -> Result<(StatusCode, Json<ReviewCreated>), ServerError> {
	if payload.name.trim().is_empty() {
		return Err(ServerError::BadRequest("name is required".to_string()));
	}
	if !(1..=5).contains(&payload.rating) {
		return Err(ServerError::BadRequest(
			"rating must be between 1 and 5".to_string(),
		));
	}

	let review = Review {
		id: Uuid::new_v4().to_string(),
		name: payload.name,
		rating: payload.rating,
		comment: payload.comment,
		approved: false,
		created_at: Utc::now(),
	};

	state.leads.create_review(&review).await?;
	tracing::info!(review_id = %review.id, "review submitted");
	Ok((StatusCode::CREATED, Json(ReviewCreated { id: review.id })))
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "Approved reviews, newest first")
    ),
    tag = "leads"
)]
/// GET /api/reviews - Approved reviews for the public site.
pub async fn list_approved_reviews(
	State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, ServerError> {
	Ok(Json(state.leads.list_reviews(true).await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    responses(
        (status = 200, description = "All reviews including unapproved, newest first"),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "leads-admin"
)]
/// GET /api/admin/reviews - Full review moderation queue.
pub async fn list_all_reviews(
	State(state): State<AppState>,
	_auth: StaffAuth,
) -> Result<Json<Vec<Review>>, ServerError> {
	Ok(Json(state.leads.list_reviews(false).await?))
}

#[utoipa::path(
    post,
    path = "/api/admin/reviews/{id}/approve",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review approved"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse),
        (status = 404, description = "No such review", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "leads-admin"
)]
/// POST /api/admin/reviews/{id}/approve - Publish a review (admin).
#[tracing::instrument(skip(state, auth))]
pub async fn approve_review(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
	auth.require_admin()?;
	state.leads.approve_review(&id).await?;
	tracing::info!(review_id = %id, "review approved");
	Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/admin/reviews/{id}",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse),
        (status = 404, description = "No such review", body = crate::error::ErrorResponse)
    ),
    security(("staff_token" = [])),
    tag = "leads-admin"
)]
/// DELETE /api/admin/reviews/{id} - Remove a review (admin).
#[tracing::instrument(skip(state, auth))]
pub async fn delete_review(
	State(state): State<AppState>,
	auth: StaffAuth,
	Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
	auth.require_admin()?;

	if state.leads.delete_review(&id).await? {
		tracing::info!(review_id = %id, "review deleted");
		Ok(StatusCode::NO_CONTENT)
	} else {
		Err(ServerError::NotFound(id))
	}
}
