// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Staff access tokens.
//!
//! Roles are opaque strings compared by equality. Tokens are stored as
//! SHA-256 hashes, never in plaintext.

use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::error::Result;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SALES: &str = "sales";

/// SHA-256 hex digest of a presented token.
pub fn hash_token(token: &str) -> String {
	hex::encode(Sha256::digest(token.as_bytes()))
}

/// Repository for staff token lookups.
#[derive(Clone)]
pub struct StaffRepository {
	pool: SqlitePool,
}

impl StaffRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Store a token hash with its role. The plaintext token is only ever
	/// shown once, by the CLI that generated it.
	#[tracing::instrument(skip(self, token_hash), fields(role = role, label = label))]
	pub async fn create_token(&self, token_hash: &str, role: &str, label: &str) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO staff_tokens (token_hash, role, label, created_at)
			VALUES (?, ?, ?, ?)
			"#,
		)
		.bind(token_hash)
		.bind(role)
		.bind(label)
		.bind(Utc::now().to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	/// Resolve a token hash to its role. `None` means the token is unknown.
	#[tracing::instrument(skip(self, token_hash))]
	pub async fn get_role_by_token_hash(&self, token_hash: &str) -> Result<Option<String>> {
		let row = sqlx::query("SELECT role FROM staff_tokens WHERE token_hash = ?")
			.bind(token_hash)
			.fetch_optional(&self.pool)
			.await?;

		Ok(row.map(|r| r.get("role")))
	}

	#[tracing::instrument(skip(self, token_hash))]
	pub async fn revoke_token(&self, token_hash: &str) -> Result<bool> {
		let result = sqlx::query("DELETE FROM staff_tokens WHERE token_hash = ?")
			.bind(token_hash)
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;

	#[test]
	fn test_hash_is_stable_and_hex() {
		let h = hash_token("secret");
		assert_eq!(h, hash_token("secret"));
		assert_ne!(h, hash_token("other"));
		assert_eq!(h.len(), 64);
		assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
	}

	#[tokio::test]
	async fn test_token_lookup_and_revocation() {
		let repo = StaffRepository::new(create_test_pool().await);
		let hash = hash_token("token-1");
		repo.create_token(&hash, ROLE_SALES, "reception desk").await.unwrap();

		assert_eq!(
			repo.get_role_by_token_hash(&hash).await.unwrap().as_deref(),
			Some(ROLE_SALES)
		);
		assert_eq!(
			repo.get_role_by_token_hash(&hash_token("wrong")).await.unwrap(),
			None
		);

		assert!(repo.revoke_token(&hash).await.unwrap());
		assert_eq!(repo.get_role_by_token_hash(&hash).await.unwrap(), None);
		assert!(!repo.revoke_token(&hash).await.unwrap());
	}
}
