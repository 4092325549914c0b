// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filter parameters for unit search.

use serde::Deserialize;

/// Page size used when the request does not supply one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper bound on the page size. Requests beyond this are clamped.
pub const MAX_LIMIT: u32 = 100;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
	Asc,
	#[default]
	Desc,
}

impl SortOrder {
	/// Lenient parse; anything other than an ascending keyword sorts
	/// descending.
	pub fn parse(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => SortOrder::Asc,
			_ => SortOrder::Desc,
		}
	}

	pub fn as_sql(self) -> &'static str {
		match self {
			SortOrder::Asc => "ASC",
			SortOrder::Desc => "DESC",
		}
	}
}

/// Sortable unit columns.
///
/// Sort keys map through this closed set before reaching SQL, so request
/// input never appears in an ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
	Title,
	Price,
	Area,
	Bedrooms,
	Bathrooms,
	#[default]
	CreatedAt,
}

impl SortField {
	/// Lenient parse; unknown keys sort by creation time.
	pub fn parse(raw: &str) -> Self {
		match raw.trim() {
			"title" => SortField::Title,
			"price" => SortField::Price,
			"area" => SortField::Area,
			"bedrooms" => SortField::Bedrooms,
			"bathrooms" => SortField::Bathrooms,
			"createdAt" | "created_at" => SortField::CreatedAt,
			other => {
				if !other.is_empty() {
					tracing::debug!(sort_by = other, "unknown sort key, sorting by created_at");
				}
				SortField::CreatedAt
			}
		}
	}

	pub fn column(self) -> &'static str {
		match self {
			SortField::Title => "title",
			SortField::Price => "price",
			SortField::Area => "area",
			SortField::Bedrooms => "bedrooms",
			SortField::Bathrooms => "bathrooms",
			SortField::CreatedAt => "created_at",
		}
	}
}

/// Typed, validated filter set for a unit search.
///
/// Built fresh per request via [`RawFilterParams::parse`]; never mutated.
/// Omitted fields impose no constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
	/// Free-text search over title, unit type, region, and project name.
	pub search: Option<String>,
	/// Minimum area in square meters, inclusive. Lower bound only.
	pub area: Option<f64>,
	pub bedrooms: Option<i64>,
	pub bathrooms: Option<i64>,
	/// Case-insensitive substring match on region.
	pub region: Option<String>,
	/// Case-insensitive substring match on project name.
	pub project: Option<String>,
	/// Exact match on the project reference.
	pub project_id: Option<String>,
	pub price_min: Option<f64>,
	pub price_max: Option<f64>,
	/// 1-based page number, always >= 1.
	pub page: u32,
	/// Page size, always in 1..=MAX_LIMIT.
	pub limit: u32,
	pub sort_by: SortField,
	pub sort_order: SortOrder,
}

impl Default for FilterSpec {
	fn default() -> Self {
		Self {
			search: None,
			area: None,
			bedrooms: None,
			bathrooms: None,
			region: None,
			project: None,
			project_id: None,
			price_min: None,
			price_max: None,
			page: 1,
			limit: DEFAULT_LIMIT,
			sort_by: SortField::default(),
			sort_order: SortOrder::default(),
		}
	}
}

impl FilterSpec {
	/// Row offset of the requested page.
	///
	/// `page` and `limit` are clamped at construction, so this can never go
	/// negative.
	pub fn offset(&self) -> i64 {
		i64::from(self.page - 1) * i64::from(self.limit)
	}
}

/// Raw query-string shape of the search parameters.
///
/// Every field is an optional string; [`parse`](Self::parse) coerces them
/// into a [`FilterSpec`]. Field names match the public API exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterParams {
	pub search: Option<String>,
	pub area: Option<String>,
	pub bedrooms: Option<String>,
	pub bathrooms: Option<String>,
	pub region: Option<String>,
	pub project: Option<String>,
	pub project_id: Option<String>,
	pub price_min: Option<String>,
	pub price_max: Option<String>,
	pub page: Option<String>,
	pub limit: Option<String>,
	pub sort_by: Option<String>,
	pub sort_order: Option<String>,
}

impl RawFilterParams {
	/// Coerce raw parameters into a typed filter set.
	///
	/// Reject-to-absent: a value that fails to parse as its expected type
	/// (or is negative, NaN, or infinite) is dropped from the filter set
	/// rather than failing the query. `page` and `limit` are clamped into
	/// their valid ranges.
	pub fn parse(self) -> FilterSpec {
		let page = parse_u32("page", self.page).map_or(1, |p| p.max(1));
		let limit = parse_u32("limit", self.limit)
			.map_or(DEFAULT_LIMIT, |l| l.clamp(1, MAX_LIMIT));

		FilterSpec {
			search: non_empty(self.search),
			area: parse_f64("area", self.area),
			bedrooms: parse_i64("bedrooms", self.bedrooms),
			bathrooms: parse_i64("bathrooms", self.bathrooms),
			region: non_empty(self.region),
			project: non_empty(self.project),
			project_id: non_empty(self.project_id),
			price_min: parse_f64("priceMin", self.price_min),
			price_max: parse_f64("priceMax", self.price_max),
			page,
			limit,
			sort_by: self.sort_by.as_deref().map(SortField::parse).unwrap_or_default(),
			sort_order: self
				.sort_order
				.as_deref()
				.map(SortOrder::parse)
				.unwrap_or_default(),
		}
	}
}

fn non_empty(raw: Option<String>) -> Option<String> {
	raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_f64(field: &'static str, raw: Option<String>) -> Option<f64> {
	let raw = non_empty(raw)?;
	match raw.parse::<f64>() {
		Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
		_ => {
			tracing::debug!(field, value = %raw, "dropping unparseable filter value");
			None
		}
	}
}

fn parse_i64(field: &'static str, raw: Option<String>) -> Option<i64> {
	let raw = non_empty(raw)?;
	match raw.parse::<i64>() {
		Ok(v) if v >= 0 => Some(v),
		_ => {
			tracing::debug!(field, value = %raw, "dropping unparseable filter value");
			None
		}
	}
}

fn parse_u32(field: &'static str, raw: Option<String>) -> Option<u32> {
	let raw = non_empty(raw)?;
	match raw.parse::<u32>() {
		Ok(v) => Some(v),
		Err(_) => {
			tracing::debug!(field, value = %raw, "dropping unparseable filter value");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_params_yield_default_spec() {
		let spec = RawFilterParams::default().parse();
		assert_eq!(spec, FilterSpec::default());
		assert_eq!(spec.page, 1);
		assert_eq!(spec.limit, DEFAULT_LIMIT);
	}

	#[test]
	fn test_numeric_coercion() {
		let params = RawFilterParams {
			area: Some("120.5".to_string()),
			bedrooms: Some("3".to_string()),
			price_min: Some("500000".to_string()),
			..Default::default()
		};
		let spec = params.parse();
		assert_eq!(spec.area, Some(120.5));
		assert_eq!(spec.bedrooms, Some(3));
		assert_eq!(spec.price_min, Some(500_000.0));
	}

	#[test]
	fn test_malformed_values_are_dropped_not_fatal() {
		let params = RawFilterParams {
			bedrooms: Some("three".to_string()),
			area: Some("NaN".to_string()),
			price_max: Some("1e999".to_string()),
			region: Some("القاهرة".to_string()),
			..Default::default()
		};
		let spec = params.parse();
		assert_eq!(spec.bedrooms, None);
		assert_eq!(spec.area, None);
		assert_eq!(spec.price_max, None);
		assert_eq!(spec.region.as_deref(), Some("القاهرة"));
	}

	#[test]
	fn test_negative_values_are_dropped() {
		let params = RawFilterParams {
			bedrooms: Some("-2".to_string()),
			price_min: Some("-1".to_string()),
			..Default::default()
		};
		let spec = params.parse();
		assert_eq!(spec.bedrooms, None);
		assert_eq!(spec.price_min, None);
	}

	#[test]
	fn test_blank_strings_are_absent() {
		let params = RawFilterParams {
			search: Some("   ".to_string()),
			project: Some(String::new()),
			..Default::default()
		};
		let spec = params.parse();
		assert_eq!(spec.search, None);
		assert_eq!(spec.project, None);
	}

	#[test]
	fn test_page_and_limit_clamping() {
		let params = RawFilterParams {
			page: Some("0".to_string()),
			limit: Some("5000".to_string()),
			..Default::default()
		};
		let spec = params.parse();
		assert_eq!(spec.page, 1);
		assert_eq!(spec.limit, MAX_LIMIT);

		let params = RawFilterParams {
			page: Some("-3".to_string()),
			limit: Some("0".to_string()),
			..Default::default()
		};
		let spec = params.parse();
		// Negative page fails u32 parsing and falls back to 1.
		assert_eq!(spec.page, 1);
		assert_eq!(spec.limit, 1);
	}

	#[test]
	fn test_offset() {
		let spec = FilterSpec {
			page: 3,
			limit: 10,
			..Default::default()
		};
		assert_eq!(spec.offset(), 20);

		let spec = FilterSpec::default();
		assert_eq!(spec.offset(), 0);
	}

	#[test]
	fn test_sort_whitelist() {
		assert_eq!(SortField::parse("price"), SortField::Price);
		assert_eq!(SortField::parse("createdAt"), SortField::CreatedAt);
		assert_eq!(
			SortField::parse("title; DROP TABLE units"),
			SortField::CreatedAt
		);
		assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
		assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
	}

	mod properties {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			// Parsing never panics and always lands in the valid ranges.
			#[test]
			fn parse_is_total(
				page in proptest::option::of(".*"),
				limit in proptest::option::of(".*"),
				bedrooms in proptest::option::of(".*"),
				area in proptest::option::of(".*"),
			) {
				let spec = RawFilterParams {
					page,
					limit,
					bedrooms,
					area,
					..Default::default()
				}
				.parse();
				prop_assert!(spec.page >= 1);
				prop_assert!((1..=MAX_LIMIT).contains(&spec.limit));
				prop_assert!(spec.offset() >= 0);
				if let Some(a) = spec.area {
					prop_assert!(a.is_finite() && a >= 0.0);
				}
			}
		}
	}
}
