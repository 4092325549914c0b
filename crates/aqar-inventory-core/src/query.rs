// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Query construction from a filter set.

use crate::filter::FilterSpec;

/// A value bound into the query, in predicate order.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
	Text(String),
	Int(i64),
	Real(f64),
}

/// An executable query shape: WHERE fragments plus their bind values.
///
/// Opaque to callers; the repository layer renders it against the `units`
/// table. A filter set with no constraints produces a spec matching the
/// entire collection.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
	conditions: Vec<String>,
	binds: Vec<BindValue>,
}

impl QuerySpec {
	/// Build a query from a filter set.
	///
	/// Provided fields combine conjunctively; the free-text `search` becomes
	/// a disjunctive group of substring matches over title, unit type,
	/// region, and project name. SQLite LIKE is case-insensitive for ASCII,
	/// which covers the Latin-script halves of the bilingual columns; Arabic
	/// has no letter case.
	pub fn build(filters: &FilterSpec) -> Self {
		let mut spec = Self {
			conditions: Vec::new(),
			binds: Vec::new(),
		};

		if let Some(search) = &filters.search {
			let pattern = like_pattern(search);
			spec.conditions.push(
				"(title LIKE ? OR unit_type LIKE ? OR region LIKE ? OR project LIKE ?)"
					.to_string(),
			);
			for _ in 0..4 {
				spec.binds.push(BindValue::Text(pattern.clone()));
			}
		}

		if let Some(area) = filters.area {
			spec.push("area >= ?", BindValue::Real(area));
		}
		if let Some(bedrooms) = filters.bedrooms {
			spec.push("bedrooms = ?", BindValue::Int(bedrooms));
		}
		if let Some(bathrooms) = filters.bathrooms {
			spec.push("bathrooms = ?", BindValue::Int(bathrooms));
		}
		if let Some(region) = &filters.region {
			spec.push("region LIKE ?", BindValue::Text(like_pattern(region)));
		}
		if let Some(project) = &filters.project {
			spec.push("project LIKE ?", BindValue::Text(like_pattern(project)));
		}
		if let Some(project_id) = &filters.project_id {
			spec.push("project_id = ?", BindValue::Text(project_id.clone()));
		}

		match (filters.price_min, filters.price_max) {
			(Some(min), Some(max)) => {
				spec.conditions.push("price BETWEEN ? AND ?".to_string());
				spec.binds.push(BindValue::Real(min));
				spec.binds.push(BindValue::Real(max));
			}
			(Some(min), None) => spec.push("price >= ?", BindValue::Real(min)),
			(None, Some(max)) => spec.push("price <= ?", BindValue::Real(max)),
			(None, None) => {}
		}

		spec
	}

	fn push(&mut self, condition: &str, bind: BindValue) {
		self.conditions.push(condition.to_string());
		self.binds.push(bind);
	}

	/// Render the WHERE clause body. Matches everything when unconstrained.
	pub fn where_clause(&self) -> String {
		if self.conditions.is_empty() {
			"1=1".to_string()
		} else {
			self.conditions.join(" AND ")
		}
	}

	/// Bind values in the order their placeholders appear.
	pub fn binds(&self) -> &[BindValue] {
		&self.binds
	}

	pub fn is_unconstrained(&self) -> bool {
		self.conditions.is_empty()
	}
}

fn like_pattern(term: &str) -> String {
	format!("%{term}%")
}
