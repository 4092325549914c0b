// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pagination envelope.

use serde::{Deserialize, Serialize};

/// Pagination metadata for a page of results.
///
/// `total` counts every record matching the filter, ignoring pagination;
/// `pages` is `ceil(total / limit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Pagination {
	pub page: u32,
	pub limit: u32,
	pub total: u64,
	pub pages: u64,
}

impl Pagination {
	/// Compute pagination metadata.
	///
	/// `limit` must be >= 1, which [`FilterSpec`](crate::FilterSpec)
	/// construction guarantees.
	pub fn new(page: u32, limit: u32, total: u64) -> Self {
		Self {
			page,
			limit,
			total,
			pages: total.div_ceil(u64::from(limit.max(1))),
		}
	}
}

/// One page of matching records plus pagination metadata.
///
/// `data.len() <= limit` always holds; a page past the end of the result set
/// is an empty `data`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
	pub data: Vec<T>,
	pub pagination: Pagination,
}

impl<T> PageResult<T> {
	pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
		Self { data, pagination }
	}

	/// Map the records of this page, keeping the pagination metadata.
	pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
		PageResult {
			data: self.data.into_iter().map(f).collect(),
			pagination: self.pagination,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pages_is_exact_ceiling() {
		assert_eq!(Pagination::new(1, 20, 25).pages, 2);
		assert_eq!(Pagination::new(1, 20, 40).pages, 2);
		assert_eq!(Pagination::new(1, 20, 41).pages, 3);
		assert_eq!(Pagination::new(1, 10, 25).pages, 3);
	}

	#[test]
	fn test_empty_collection_has_zero_pages() {
		let p = Pagination::new(1, 20, 0);
		assert_eq!(p.total, 0);
		assert_eq!(p.pages, 0);
	}

	#[test]
	fn test_map_preserves_pagination() {
		let page = PageResult::new(vec![1, 2, 3], Pagination::new(2, 3, 10));
		let mapped = page.map(|n| n.to_string());
		assert_eq!(mapped.data, vec!["1", "2", "3"]);
		assert_eq!(mapped.pagination, Pagination::new(2, 3, 10));
	}

	#[test]
	fn test_serialized_shape() {
		let page = PageResult::new(vec![1], Pagination::new(1, 20, 25));
		let json = serde_json::to_value(&page).unwrap();
		assert_eq!(json["data"], serde_json::json!([1]));
		assert_eq!(json["pagination"]["page"], 1);
		assert_eq!(json["pagination"]["limit"], 20);
		assert_eq!(json["pagination"]["total"], 25);
		assert_eq!(json["pagination"]["pages"], 2);
	}
}
