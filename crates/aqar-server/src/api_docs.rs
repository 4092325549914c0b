// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI document, served at `/api/openapi.json`.

use axum::Json;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::search::search_units,
        crate::routes::search::get_unit,
        crate::routes::units::create_unit,
        crate::routes::units::update_unit,
        crate::routes::units::delete_unit,
        crate::routes::units::get_unit_raw,
        crate::routes::developers::list_developers,
        crate::routes::developers::get_developer,
        crate::routes::developers::create_developer,
        crate::routes::developers::update_developer,
        crate::routes::developers::delete_developer,
        crate::routes::projects::list_projects,
        crate::routes::projects::get_project,
        crate::routes::projects::create_project,
        crate::routes::projects::update_project,
        crate::routes::projects::delete_project,
        crate::routes::leads::create_consultation,
        crate::routes::leads::list_consultations,
        crate::routes::leads::create_review,
        crate::routes::leads::list_approved_reviews,
        crate::routes::leads::list_all_reviews,
        crate::routes::leads::approve_review,
        crate::routes::leads::delete_review,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        crate::routes::health::HealthResponse,
        crate::routes::search::LocalizedUnit,
        crate::routes::search::SearchResponse,
        crate::routes::units::UnitPayload,
        crate::routes::developers::LocalizedDeveloper,
        crate::routes::developers::DeveloperPayload,
        crate::routes::projects::LocalizedProject,
        crate::routes::projects::ProjectPayload,
        crate::routes::leads::ConsultationPayload,
        crate::routes::leads::ConsultationCreated,
        crate::routes::leads::ConsultationListResponse,
        crate::routes::leads::ReviewPayload,
        crate::routes::leads::ReviewCreated,
        aqar_inventory_core::Pagination,
        aqar_server_db::Consultation,
        aqar_server_db::Review,
        aqar_server_db::Unit,
    )),
    modifiers(&StaffTokenSecurity),
    tags(
        (name = "health", description = "Liveness"),
        (name = "inventory", description = "Public unit search"),
        (name = "inventory-admin", description = "Staff unit management"),
        (name = "catalog", description = "Developers and projects"),
        (name = "catalog-admin", description = "Staff catalog management"),
        (name = "leads", description = "Consultations and reviews"),
        (name = "leads-admin", description = "Staff lead management"),
    ),
    info(
        title = "Aqar API",
        description = "Bilingual real-estate listings backend"
    )
)]
pub struct ApiDoc;

struct StaffTokenSecurity;

impl Modify for StaffTokenSecurity {
	fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
		if let Some(components) = openapi.components.as_mut() {
			components.add_security_scheme(
				"staff_token",
				SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
			);
		}
	}
}

/// GET /api/openapi.json - The OpenAPI document.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}
