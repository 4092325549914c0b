// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Domain records stored in the database.
//!
//! Bilingual text is the flat representation: the base field holds Arabic
//! (primary) and the `_en` sibling holds the optional English override.
//! Serialized field names are kept as-is so the `_en` suffix convention
//! survives the JSON boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A marketed unit. The searchable inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Unit {
	pub id: String,
	pub title: String,
	pub title_en: Option<String>,
	pub unit_type: String,
	pub unit_type_en: Option<String>,
	pub region: String,
	pub region_en: Option<String>,
	/// Project display name, denormalized for search.
	pub project: String,
	pub project_en: Option<String>,
	/// Relational reference to the owning project, if any.
	pub project_id: Option<String>,
	/// Square meters.
	pub area: f64,
	pub bedrooms: i64,
	pub bathrooms: i64,
	pub price: f64,
	pub description: Option<String>,
	pub description_en: Option<String>,
	/// Opaque URLs on the image host.
	pub image_urls: Vec<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// A property developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Developer {
	pub id: String,
	pub name: String,
	pub name_en: Option<String>,
	pub description: Option<String>,
	pub description_en: Option<String>,
	pub logo_url: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// A development project, shown on the map-based search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Project {
	pub id: String,
	pub developer_id: Option<String>,
	pub name: String,
	pub name_en: Option<String>,
	pub region: String,
	pub region_en: Option<String>,
	pub description: Option<String>,
	pub description_en: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub image_urls: Vec<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// A consultation request captured from the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Consultation {
	pub id: String,
	pub name: String,
	pub phone: String,
	pub email: Option<String>,
	pub message: Option<String>,
	pub created_at: DateTime<Utc>,
}

/// A visitor review. Hidden from the public site until approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Review {
	pub id: String,
	pub name: String,
	/// 1..=5
	pub rating: i64,
	pub comment: Option<String>,
	pub approved: bool,
	pub created_at: DateTime<Utc>,
}
