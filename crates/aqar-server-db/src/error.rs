// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(sqlx::Error),

	#[error("Foreign key violation: {0}")]
	ForeignKey(String),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Internal: {0}")]
	Internal(String),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl From<sqlx::Error> for DbError {
	fn from(e: sqlx::Error) -> Self {
		// SQLite enforces the REFERENCES clauses in the schema; a dangling
		// reference is the caller's mistake, not a server fault.
		match e {
			sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
				DbError::ForeignKey(db.message().to_string())
			}
			other => DbError::Sqlx(other),
		}
	}
}

pub type Result<T> = std::result::Result<T, DbError>;
