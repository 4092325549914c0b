// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project repository.

use sqlx::sqlite::SqlitePool;

use crate::error::{DbError, Result};
use crate::inventory::parse_timestamp;
use crate::types::Project;

const PROJECT_COLUMNS: &str = "id, developer_id, name, name_en, region, region_en, description, \
	 description_en, latitude, longitude, image_urls, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ProjectRow {
	id: String,
	developer_id: Option<String>,
	name: String,
	name_en: Option<String>,
	region: String,
	region_en: Option<String>,
	description: Option<String>,
	description_en: Option<String>,
	latitude: Option<f64>,
	longitude: Option<f64>,
	image_urls: String,
	created_at: String,
	updated_at: String,
}

impl TryFrom<ProjectRow> for Project {
	type Error = DbError;

	fn try_from(row: ProjectRow) -> Result<Self> {
		Ok(Project {
			id: row.id,
			developer_id: row.developer_id,
			name: row.name,
			name_en: row.name_en,
			region: row.region,
			region_en: row.region_en,
			description: row.description,
			description_en: row.description_en,
			latitude: row.latitude,
			longitude: row.longitude,
			image_urls: serde_json::from_str(&row.image_urls)?,
			created_at: parse_timestamp(&row.created_at)?,
			updated_at: parse_timestamp(&row.updated_at)?,
		})
	}
}

/// Repository for project records. Projects carry the coordinates the
/// map-based search page renders.
#[derive(Clone)]
pub struct ProjectRepository {
	pool: SqlitePool,
}

impl ProjectRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, project), fields(project_id = %project.id))]
	pub async fn create(&self, project: &Project) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO projects (
				id, developer_id, name, name_en, region, region_en,
				description, description_en, latitude, longitude, image_urls,
				created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&project.id)
		.bind(&project.developer_id)
		.bind(&project.name)
		.bind(&project.name_en)
		.bind(&project.region)
		.bind(&project.region_en)
		.bind(&project.description)
		.bind(&project.description_en)
		.bind(project.latitude)
		.bind(project.longitude)
		.bind(serde_json::to_string(&project.image_urls)?)
		.bind(project.created_at.to_rfc3339())
		.bind(project.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, id: &str) -> Result<Option<Project>> {
		let row: Option<ProjectRow> = sqlx::query_as(&format!(
			"SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
		))
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		row.map(Project::try_from).transpose()
	}

	/// List projects, optionally scoped to one developer.
	#[tracing::instrument(skip(self))]
	pub async fn list(&self, developer_id: Option<&str>) -> Result<Vec<Project>> {
		let rows: Vec<ProjectRow> = match developer_id {
			Some(developer_id) => {
				sqlx::query_as(&format!(
					"SELECT {PROJECT_COLUMNS} FROM projects WHERE developer_id = ? \
					 ORDER BY created_at DESC"
				))
				.bind(developer_id)
				.fetch_all(&self.pool)
				.await?
			}
			None => {
				sqlx::query_as(&format!(
					"SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
				))
				.fetch_all(&self.pool)
				.await?
			}
		};

		rows.into_iter().map(Project::try_from).collect()
	}

	#[tracing::instrument(skip(self, project), fields(project_id = %project.id))]
	pub async fn update(&self, project: &Project) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE projects SET
				developer_id = ?, name = ?, name_en = ?, region = ?, region_en = ?,
				description = ?, description_en = ?, latitude = ?, longitude = ?,
				image_urls = ?, updated_at = ?
			WHERE id = ?
			"#,
		)
		.bind(&project.developer_id)
		.bind(&project.name)
		.bind(&project.name_en)
		.bind(&project.region)
		.bind(&project.region_en)
		.bind(&project.description)
		.bind(&project.description_en)
		.bind(project.latitude)
		.bind(project.longitude)
		.bind(serde_json::to_string(&project.image_urls)?)
		.bind(project.updated_at.to_rfc3339())
		.bind(&project.id)
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(project.id.clone()));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, id: &str) -> Result<bool> {
		let result = sqlx::query("DELETE FROM projects WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::developer::DeveloperRepository;
	use crate::testing::create_test_pool;
	use crate::types::Developer;
	use chrono::Utc;
	use uuid::Uuid;

	fn sample_developer() -> Developer {
		let now = Utc::now();
		Developer {
			id: Uuid::new_v4().to_string(),
			name: "سوديك".to_string(),
			name_en: Some("Sodic".to_string()),
			description: None,
			description_en: None,
			logo_url: None,
			created_at: now,
			updated_at: now,
		}
	}

	fn sample_project(developer_id: Option<&str>) -> Project {
		let now = Utc::now();
		Project {
			id: Uuid::new_v4().to_string(),
			developer_id: developer_id.map(str::to_string),
			name: "تلال الساحل".to_string(),
			name_en: Some("Coast Hills".to_string()),
			region: "الساحل الشمالي".to_string(),
			region_en: Some("North Coast".to_string()),
			description: None,
			description_en: None,
			latitude: Some(31.05),
			longitude: Some(28.45),
			image_urls: vec!["https://img.example/p1.jpg".to_string()],
			created_at: now,
			updated_at: now,
		}
	}

	#[tokio::test]
	async fn test_crud_roundtrip() {
		let repo = ProjectRepository::new(create_test_pool().await);
		let mut project = sample_project(None);
		repo.create(&project).await.unwrap();

		let fetched = repo.get(&project.id).await.unwrap().unwrap();
		assert_eq!(fetched.name, project.name);
		assert_eq!(fetched.latitude, Some(31.05));
		assert_eq!(fetched.image_urls, project.image_urls);

		project.region_en = Some("Sahel".to_string());
		repo.update(&project).await.unwrap();
		let fetched = repo.get(&project.id).await.unwrap().unwrap();
		assert_eq!(fetched.region_en.as_deref(), Some("Sahel"));

		assert!(repo.delete(&project.id).await.unwrap());
		assert!(repo.get(&project.id).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn test_list_scoped_to_developer() {
		let pool = create_test_pool().await;
		let developers = DeveloperRepository::new(pool.clone());
		let repo = ProjectRepository::new(pool);

		let developer = sample_developer();
		developers.create(&developer).await.unwrap();
		repo.create(&sample_project(Some(&developer.id)))
			.await
			.unwrap();
		repo.create(&sample_project(Some(&developer.id)))
			.await
			.unwrap();
		repo.create(&sample_project(None)).await.unwrap();

		assert_eq!(repo.list(None).await.unwrap().len(), 3);
		assert_eq!(repo.list(Some(&developer.id)).await.unwrap().len(), 2);
		assert!(repo.list(Some("missing")).await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_create_with_unknown_developer_is_rejected() {
		let repo = ProjectRepository::new(create_test_pool().await);
		let err = repo
			.create(&sample_project(Some("no-such-developer")))
			.await
			.unwrap_err();
		assert!(matches!(err, DbError::ForeignKey(_)));
	}

	#[tokio::test]
	async fn test_deleting_developer_detaches_projects() {
		let pool = create_test_pool().await;
		let developers = DeveloperRepository::new(pool.clone());
		let repo = ProjectRepository::new(pool);

		let developer = sample_developer();
		developers.create(&developer).await.unwrap();
		let project = sample_project(Some(&developer.id));
		repo.create(&project).await.unwrap();

		assert!(developers.delete(&developer.id).await.unwrap());
		let fetched = repo.get(&project.id).await.unwrap().unwrap();
		assert!(fetched.developer_id.is_none());
	}
}
