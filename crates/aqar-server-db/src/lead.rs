// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lead capture: consultation requests and visitor reviews.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::error::{DbError, Result};
use crate::inventory::parse_timestamp;
use crate::types::{Consultation, Review};

#[derive(sqlx::FromRow)]
struct ConsultationRow {
	id: String,
	name: String,
	phone: String,
	email: Option<String>,
	message: Option<String>,
	created_at: String,
}

impl TryFrom<ConsultationRow> for Consultation {
	type Error = DbError;

	fn try_from(row: ConsultationRow) -> Result<Self> {
		Ok(Consultation {
			id: row.id,
			name: row.name,
			phone: row.phone,
			email: row.email,
			message: row.message,
			created_at: parse_timestamp(&row.created_at)?,
		})
	}
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
	id: String,
	name: String,
	rating: i64,
	comment: Option<String>,
	approved: i64,
	created_at: String,
}

impl TryFrom<ReviewRow> for Review {
	type Error = DbError;

	fn try_from(row: ReviewRow) -> Result<Self> {
		Ok(Review {
			id: row.id,
			name: row.name,
			rating: row.rating,
			comment: row.comment,
			approved: row.approved != 0,
			created_at: parse_timestamp(&row.created_at)?,
		})
	}
}

/// Repository for leads captured from the public site.
#[derive(Clone)]
pub struct LeadRepository {
	pool: SqlitePool,
}

impl LeadRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, consultation), fields(consultation_id = %consultation.id))]
	pub async fn create_consultation(&self, consultation: &Consultation) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO consultations (id, name, phone, email, message, created_at)
			VALUES (?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&consultation.id)
		.bind(&consultation.name)
		.bind(&consultation.phone)
		.bind(&consultation.email)
		.bind(&consultation.message)
		.bind(consultation.created_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	/// List consultations newest first, with the total for pagination.
	#[tracing::instrument(skip(self))]
	pub async fn list_consultations(
		&self,
		limit: i64,
		offset: i64,
	) -> Result<(Vec<Consultation>, i64)> {
		let count_row = sqlx::query("SELECT COUNT(*) as cnt FROM consultations")
			.fetch_one(&self.pool)
			.await?;
		let total: i64 = count_row.get("cnt");

		let rows: Vec<ConsultationRow> = sqlx::query_as(
			"SELECT id, name, phone, email, message, created_at FROM consultations \
			 ORDER BY created_at DESC LIMIT ? OFFSET ?",
		)
		.bind(limit)
		.bind(offset)
		.fetch_all(&self.pool)
		.await?;

		let consultations = rows
			.into_iter()
			.map(Consultation::try_from)
			.collect::<Result<Vec<_>>>()?;
		Ok((consultations, total))
	}

	#[tracing::instrument(skip(self, review), fields(review_id = %review.id))]
	pub async fn create_review(&self, review: &Review) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO reviews (id, name, rating, comment, approved, created_at)
			VALUES (?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&review.id)
		.bind(&review.name)
		.bind(review.rating)
		.bind(&review.comment)
		.bind(i64::from(review.approved))
		.bind(review.created_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	/// List reviews newest first. The public surface passes
	/// `approved_only = true`; staff see everything.
	#[tracing::instrument(skip(self))]
	pub async fn list_reviews(&self, approved_only: bool) -> Result<Vec<Review>> {
		let sql = if approved_only {
			"SELECT id, name, rating, comment, approved, created_at FROM reviews \
			 WHERE approved = 1 ORDER BY created_at DESC"
		} else {
			"SELECT id, name, rating, comment, approved, created_at FROM reviews \
			 ORDER BY created_at DESC"
		};

		let rows: Vec<ReviewRow> = sqlx::query_as(sql).fetch_all(&self.pool).await?;
		rows.into_iter().map(Review::try_from).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn approve_review(&self, id: &str) -> Result<()> {
		let result = sqlx::query("UPDATE reviews SET approved = 1 WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(id.to_string()));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn delete_review(&self, id: &str) -> Result<bool> {
		let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
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
	use chrono::{Duration, Utc};
	use uuid::Uuid;

	fn sample_consultation(n: i64) -> Consultation {
		Consultation {
			id: Uuid::new_v4().to_string(),
			name: format!("عميل {n}"),
			phone: "+201000000000".to_string(),
			email: Some("lead@example.com".to_string()),
			message: Some("أرغب في استشارة".to_string()),
			created_at: Utc::now() - Duration::minutes(n),
		}
	}

	fn sample_review(rating: i64) -> Review {
		Review {
			id: Uuid::new_v4().to_string(),
			name: "زائر".to_string(),
			rating,
			comment: Some("خدمة ممتازة".to_string()),
			approved: false,
			created_at: Utc::now(),
		}
	}

	#[tokio::test]
	async fn test_consultation_capture_and_listing() {
		let repo = LeadRepository::new(create_test_pool().await);
		for n in 0..5 {
			repo.create_consultation(&sample_consultation(n)).await.unwrap();
		}

		let (page, total) = repo.list_consultations(2, 0).await.unwrap();
		assert_eq!(page.len(), 2);
		assert_eq!(total, 5);
		// Newest first
		assert!(page[0].created_at >= page[1].created_at);

		let (page, total) = repo.list_consultations(2, 4).await.unwrap();
		assert_eq!(page.len(), 1);
		assert_eq!(total, 5);
	}

	#[tokio::test]
	async fn test_review_approval_flow() {
		let repo = LeadRepository::new(create_test_pool().await);
		let review = sample_review(5);
		repo.create_review(&review).await.unwrap();
		repo.create_review(&sample_review(3)).await.unwrap();

		// Nothing approved yet: public listing is empty, staff see both.
		assert!(repo.list_reviews(true).await.unwrap().is_empty());
		assert_eq!(repo.list_reviews(false).await.unwrap().len(), 2);

		repo.approve_review(&review.id).await.unwrap();
		let visible = repo.list_reviews(true).await.unwrap();
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].id, review.id);
		assert!(visible[0].approved);

		assert!(repo.delete_review(&review.id).await.unwrap());
		assert!(repo.list_reviews(true).await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_approve_missing_review_is_not_found() {
		let repo = LeadRepository::new(create_test_pool().await);
		let err = repo.approve_review("missing").await.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
	}
}
