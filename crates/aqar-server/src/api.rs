// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use axum::{
	routing::{delete, get, post, put},
	Router,
};
use sqlx::sqlite::SqlitePool;

use aqar_server_db::{
	DeveloperRepository, LeadRepository, ProjectRepository, StaffRepository, UnitRepository,
};

use crate::routes;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub units: UnitRepository,
	pub developers: DeveloperRepository,
	pub projects: ProjectRepository,
	pub leads: LeadRepository,
	pub staff: StaffRepository,
}

/// Build the application state from a database pool.
pub fn create_app_state(pool: SqlitePool) -> AppState {
	AppState {
		units: UnitRepository::new(pool.clone()),
		developers: DeveloperRepository::new(pool.clone()),
		projects: ProjectRepository::new(pool.clone()),
		leads: LeadRepository::new(pool.clone()),
		staff: StaffRepository::new(pool),
	}
}

/// Build the full router.
///
/// Public routes serve the site; staff routes authenticate per handler via
/// the [`StaffAuth`](crate::auth_middleware::StaffAuth) extractor.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		// Health and API docs
		.route("/health", get(routes::health::health_check))
		.route("/api/openapi.json", get(crate::api_docs::serve_openapi))
		// Public inventory
		.route("/api/search", get(routes::search::search_units))
		.route("/api/units/{id}", get(routes::search::get_unit))
		// Public catalog
		.route("/api/developers", get(routes::developers::list_developers))
		.route(
			"/api/developers/{id}",
			get(routes::developers::get_developer),
		)
		.route("/api/projects", get(routes::projects::list_projects))
		.route("/api/projects/{id}", get(routes::projects::get_project))
		// Public lead capture
		.route(
			"/api/consultations",
			post(routes::leads::create_consultation),
		)
		.route("/api/reviews", get(routes::leads::list_approved_reviews))
		.route("/api/reviews", post(routes::leads::create_review))
		// Staff inventory management
		.route("/api/units", post(routes::units::create_unit))
		.route("/api/units/{id}", put(routes::units::update_unit))
		.route("/api/units/{id}", delete(routes::units::delete_unit))
		.route("/api/admin/units/{id}", get(routes::units::get_unit_raw))
		// Staff catalog management
		.route(
			"/api/developers",
			post(routes::developers::create_developer),
		)
		.route(
			"/api/developers/{id}",
			put(routes::developers::update_developer),
		)
		.route(
			"/api/developers/{id}",
			delete(routes::developers::delete_developer),
		)
		.route("/api/projects", post(routes::projects::create_project))
		.route("/api/projects/{id}", put(routes::projects::update_project))
		.route(
			"/api/projects/{id}",
			delete(routes::projects::delete_project),
		)
		// Staff lead management
		.route(
			"/api/admin/consultations",
			get(routes::leads::list_consultations),
		)
		.route("/api/admin/reviews", get(routes::leads::list_all_reviews))
		.route(
			"/api/admin/reviews/{id}/approve",
			post(routes::leads::approve_review),
		)
		.route(
			"/api/admin/reviews/{id}",
			delete(routes::leads::delete_review),
		)
		.with_state(state)
}
