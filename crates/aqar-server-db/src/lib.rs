// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Database layer for the Aqar server.
//!
//! SQLite via sqlx. Each resource gets a repository struct over a shared
//! pool; bilingual text lives in `X` / `X_en` column pairs matching the
//! resolver convention in `aqar-common-i18n`.

pub mod developer;
pub mod error;
pub mod inventory;
pub mod lead;
pub mod migrate;
pub mod pool;
pub mod project;
pub mod staff;
pub mod testing;
pub mod types;

pub use developer::DeveloperRepository;
pub use error::{DbError, Result};
pub use inventory::{UnitRepository, UnitStore};
pub use lead::LeadRepository;
pub use migrate::run_migrations;
pub use pool::create_pool;
pub use project::ProjectRepository;
pub use staff::{hash_token, StaffRepository, ROLE_ADMIN, ROLE_SALES};
pub use types::{Consultation, Developer, Project, Review, Unit};
