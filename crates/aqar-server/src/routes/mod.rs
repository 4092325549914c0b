// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP route handlers, grouped by resource.

pub mod developers;
pub mod health;
pub mod leads;
pub mod projects;
pub mod search;
pub mod units;
