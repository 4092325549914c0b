// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Public inventory search and unit detail.
//!
//! Responses are localized: each bilingual field pair collapses into one
//! field in the negotiated locale, falling back to Arabic when the English
//! value is missing or empty.

use axum::{
	extract::{Path, Query, State},
	Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use aqar_common_i18n::{resolve_field, Locale};
use aqar_inventory_core::{Pagination, RawFilterParams};
use aqar_server_db::Unit;

use crate::{api::AppState, error::ServerError, locale::RequestLocale};

/// A unit with bilingual fields collapsed for one locale.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocalizedUnit {
	pub id: String,
	pub title: String,
	pub unit_type: String,
	pub region: String,
	pub project: String,
	pub project_id: Option<String>,
	pub area: f64,
	pub bedrooms: i64,
	pub bathrooms: i64,
	pub price: f64,
	pub description: Option<String>,
	pub image_urls: Vec<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub created_at: String,
}

impl LocalizedUnit {
	pub fn from_unit(unit: Unit, locale: Locale) -> Self {
		let description = resolve_field(
			unit.description.as_deref(),
			unit.description_en.as_deref(),
			locale,
		);
		Self {
			id: unit.id,
			title: resolve_field(Some(&unit.title), unit.title_en.as_deref(), locale),
			unit_type: resolve_field(Some(&unit.unit_type), unit.unit_type_en.as_deref(), locale),
			region: resolve_field(Some(&unit.region), unit.region_en.as_deref(), locale),
			project: resolve_field(Some(&unit.project), unit.project_en.as_deref(), locale),
			project_id: unit.project_id,
			area: unit.area,
			bedrooms: unit.bedrooms,
			bathrooms: unit.bathrooms,
			price: unit.price,
			description: (!description.is_empty()).then_some(description),
			image_urls: unit.image_urls,
			latitude: unit.latitude,
			longitude: unit.longitude,
			created_at: unit.created_at.to_rfc3339(),
		}
	}
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
	pub data: Vec<LocalizedUnit>,
	pub pagination: Pagination,
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("search" = Option<String>, Query, description = "Free-text term matched against title, type, region and project"),
        ("area" = Option<f64>, Query, description = "Minimum area in square meters"),
        ("bedrooms" = Option<i64>, Query, description = "Exact bedroom count"),
        ("bathrooms" = Option<i64>, Query, description = "Exact bathroom count"),
        ("region" = Option<String>, Query, description = "Region substring match"),
        ("project" = Option<String>, Query, description = "Project name substring match"),
        ("projectId" = Option<String>, Query, description = "Exact project reference"),
        ("priceMin" = Option<f64>, Query, description = "Inclusive price lower bound"),
        ("priceMax" = Option<f64>, Query, description = "Inclusive price upper bound"),
        ("page" = Option<u32>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u32>, Query, description = "Page size (default: 20, max: 100)"),
        ("sortBy" = Option<String>, Query, description = "Sort field: price, area, bedrooms, bathrooms, title, created_at"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default: desc)"),
        ("lang" = Option<String>, Query, description = "Response locale: ar (default) or en")
    ),
    responses(
        (status = 200, description = "Matching units with pagination metadata", body = SearchResponse)
    ),
    tag = "inventory"
)]
/// GET /api/search - Filtered, paginated unit search.
#[tracing::instrument(skip(state, params))]
pub async fn search_units(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Query(params): Query<RawFilterParams>,
) -> Result<Json<SearchResponse>, ServerError> {
	let filters = params.parse();
	let page = state.units.search(&filters).await?;

	tracing::debug!(
		total = page.pagination.total,
		page = page.pagination.page,
		locale = %locale,
		"search served"
	);

	let localized = page.map(|unit| LocalizedUnit::from_unit(unit, locale));
	Ok(Json(SearchResponse {
		data: localized.data,
		pagination: localized.pagination,
	}))
}

#[utoipa::path(
    get,
    path = "/api/units/{id}",
    params(
        ("id" = String, Path, description = "Unit ID"),
        ("lang" = Option<String>, Query, description = "Response locale: ar (default) or en")
    ),
    responses(
        (status = 200, description = "Unit detail", body = LocalizedUnit),
        (status = 404, description = "No such unit", body = crate::error::ErrorResponse)
    ),
    tag = "inventory"
)]
/// GET /api/units/{id} - Localized unit detail.
pub async fn get_unit(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Path(id): Path<String>,
) -> Result<Json<LocalizedUnit>, ServerError> {
	let unit = state
		.units
		.get(&id)
		.await?
		.ok_or_else(|| ServerError::NotFound(id))?;
	Ok(Json(LocalizedUnit::from_unit(unit, locale)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;

	fn sample_unit() -> Unit {
		let now = Utc::now();
		Unit {
			id: "u-1".to_string(),
			title: "شقة فاخرة".to_string(),
			title_en: Some("Luxury Apartment".to_string()),
			unit_type: "شقة".to_string(),
			unit_type_en: Some("Apartment".to_string()),
			region: "التجمع الخامس".to_string(),
			region_en: None,
			project: "لوتس".to_string(),
			project_en: Some("".to_string()),
			project_id: None,
			area: 150.0,
			bedrooms: 3,
			bathrooms: 2,
			price: 2_500_000.0,
			description: Some("وصف".to_string()),
			description_en: None,
			image_urls: vec![],
			latitude: None,
			longitude: None,
			created_at: now,
			updated_at: now,
		}
	}

	#[test]
	fn test_localization_prefers_english_when_present() {
		let localized = LocalizedUnit::from_unit(sample_unit(), Locale::En);
		assert_eq!(localized.title, "Luxury Apartment");
		assert_eq!(localized.unit_type, "Apartment");
		// Missing and empty English values fall back to Arabic.
		assert_eq!(localized.region, "التجمع الخامس");
		assert_eq!(localized.project, "لوتس");
		assert_eq!(localized.description.as_deref(), Some("وصف"));
	}

	#[test]
	fn test_arabic_locale_ignores_english_overrides() {
		let localized = LocalizedUnit::from_unit(sample_unit(), Locale::Ar);
		assert_eq!(localized.title, "شقة فاخرة");
		assert_eq!(localized.unit_type, "شقة");
	}
}
