// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Inventory filter and query construction for Aqar.
//!
//! This crate holds the pure half of the unit search: translating a set of
//! optional filter parameters into an executable query shape, plus the
//! pagination envelope. Nothing here touches a database; the repository layer
//! consumes the [`QuerySpec`] and runs it.
//!
//! Query-string input arrives as [`RawFilterParams`] (every field an optional
//! string) and is coerced into a typed [`FilterSpec`] with a reject-to-absent
//! policy: a value that does not parse as its expected type drops out of the
//! filter set instead of failing the whole query.

mod filter;
mod page;
mod query;

pub use filter::{FilterSpec, RawFilterParams, SortField, SortOrder, DEFAULT_LIMIT, MAX_LIMIT};
pub use page::{PageResult, Pagination};
pub use query::{BindValue, QuerySpec};
