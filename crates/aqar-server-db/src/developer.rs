// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Developer repository.

use sqlx::sqlite::SqlitePool;

use crate::error::{DbError, Result};
use crate::inventory::parse_timestamp;
use crate::types::Developer;

const DEVELOPER_COLUMNS: &str =
	"id, name, name_en, description, description_en, logo_url, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct DeveloperRow {
	id: String,
	name: String,
	name_en: Option<String>,
	description: Option<String>,
	description_en: Option<String>,
	logo_url: Option<String>,
	created_at: String,
	updated_at: String,
}

impl TryFrom<DeveloperRow> for Developer {
	type Error = DbError;

	fn try_from(row: DeveloperRow) -> Result<Self> {
		Ok(Developer {
			id: row.id,
			name: row.name,
			name_en: row.name_en,
			description: row.description,
			description_en: row.description_en,
			logo_url: row.logo_url,
			created_at: parse_timestamp(&row.created_at)?,
			updated_at: parse_timestamp(&row.updated_at)?,
		})
	}
}

/// Repository for developer records.
#[derive(Clone)]
pub struct DeveloperRepository {
	pool: SqlitePool,
}

impl DeveloperRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, developer), fields(developer_id = %developer.id))]
	pub async fn create(&self, developer: &Developer) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO developers (
				id, name, name_en, description, description_en, logo_url,
				created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&developer.id)
		.bind(&developer.name)
		.bind(&developer.name_en)
		.bind(&developer.description)
		.bind(&developer.description_en)
		.bind(&developer.logo_url)
		.bind(developer.created_at.to_rfc3339())
		.bind(developer.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, id: &str) -> Result<Option<Developer>> {
		let row: Option<DeveloperRow> = sqlx::query_as(&format!(
			"SELECT {DEVELOPER_COLUMNS} FROM developers WHERE id = ?"
		))
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		row.map(Developer::try_from).transpose()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Developer>> {
		let rows: Vec<DeveloperRow> = sqlx::query_as(&format!(
			"SELECT {DEVELOPER_COLUMNS} FROM developers ORDER BY created_at DESC"
		))
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(Developer::try_from).collect()
	}

	#[tracing::instrument(skip(self, developer), fields(developer_id = %developer.id))]
	pub async fn update(&self, developer: &Developer) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE developers SET
				name = ?, name_en = ?, description = ?, description_en = ?,
				logo_url = ?, updated_at = ?
			WHERE id = ?
			"#,
		)
		.bind(&developer.name)
		.bind(&developer.name_en)
		.bind(&developer.description)
		.bind(&developer.description_en)
		.bind(&developer.logo_url)
		.bind(developer.updated_at.to_rfc3339())
		.bind(&developer.id)
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(developer.id.clone()));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, id: &str) -> Result<bool> {
		let result = sqlx::query("DELETE FROM developers WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;
	use chrono::Utc;
	use uuid::Uuid;

	fn sample_developer() -> Developer {
		let now = Utc::now();
		Developer {
			id: Uuid::new_v4().to_string(),
			name: "بالم هيلز".to_string(),
			name_en: Some("Palm Hills".to_string()),
			description: None,
			description_en: None,
			logo_url: Some("https://img.example/logo.png".to_string()),
			created_at: now,
			updated_at: now,
		}
	}

	#[tokio::test]
	async fn test_crud_roundtrip() {
		let repo = DeveloperRepository::new(create_test_pool().await);
		let mut developer = sample_developer();
		repo.create(&developer).await.unwrap();

		let fetched = repo.get(&developer.id).await.unwrap().unwrap();
		assert_eq!(fetched.name, developer.name);
		assert_eq!(fetched.name_en, developer.name_en);

		developer.name_en = Some("Palm Hills Developments".to_string());
		repo.update(&developer).await.unwrap();
		let fetched = repo.get(&developer.id).await.unwrap().unwrap();
		assert_eq!(fetched.name_en.as_deref(), Some("Palm Hills Developments"));

		assert_eq!(repo.list().await.unwrap().len(), 1);
		assert!(repo.delete(&developer.id).await.unwrap());
		assert!(repo.list().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_update_missing_is_not_found() {
		let repo = DeveloperRepository::new(create_test_pool().await);
		let err = repo.update(&sample_developer()).await.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
	}
}
