// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Unit inventory repository: filtered search with pagination, plus CRUD.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use aqar_inventory_core::{BindValue, FilterSpec, PageResult, Pagination, QuerySpec};

use crate::error::{DbError, Result};
use crate::types::Unit;

const UNIT_COLUMNS: &str = "id, title, title_en, unit_type, unit_type_en, region, region_en, \
	 project, project_en, project_id, area, bedrooms, bathrooms, price, description, \
	 description_en, image_urls, latitude, longitude, created_at, updated_at";

#[async_trait]
pub trait UnitStore: Send + Sync {
	async fn search(&self, filters: &FilterSpec) -> Result<PageResult<Unit>>;
	async fn create(&self, unit: &Unit) -> Result<()>;
	async fn get(&self, id: &str) -> Result<Option<Unit>>;
	async fn update(&self, unit: &Unit) -> Result<()>;
	async fn delete(&self, id: &str) -> Result<bool>;
}

/// Repository for unit inventory operations.
///
/// `search` is the read path behind `GET /api/search`: one count round trip
/// for the full match set, one page fetch, both driven by the same
/// [`QuerySpec`]. All IDs are UUIDs stored as strings.
#[derive(Clone)]
pub struct UnitRepository {
	pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct UnitRow {
	id: String,
	title: String,
	title_en: Option<String>,
	unit_type: String,
	unit_type_en: Option<String>,
	region: String,
	region_en: Option<String>,
	project: String,
	project_en: Option<String>,
	project_id: Option<String>,
	area: f64,
	bedrooms: i64,
	bathrooms: i64,
	price: f64,
	description: Option<String>,
	description_en: Option<String>,
	image_urls: String,
	latitude: Option<f64>,
	longitude: Option<f64>,
	created_at: String,
	updated_at: String,
}

impl TryFrom<UnitRow> for Unit {
	type Error = DbError;

	fn try_from(row: UnitRow) -> Result<Self> {
		Ok(Unit {
			id: row.id,
			title: row.title,
			title_en: row.title_en,
			unit_type: row.unit_type,
			unit_type_en: row.unit_type_en,
			region: row.region,
			region_en: row.region_en,
			project: row.project,
			project_en: row.project_en,
			project_id: row.project_id,
			area: row.area,
			bedrooms: row.bedrooms,
			bathrooms: row.bathrooms,
			price: row.price,
			description: row.description,
			description_en: row.description_en,
			image_urls: serde_json::from_str(&row.image_urls)?,
			latitude: row.latitude,
			longitude: row.longitude,
			created_at: parse_timestamp(&row.created_at)?,
			updated_at: parse_timestamp(&row.updated_at)?,
		})
	}
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
	DateTime::parse_from_rfc3339(raw)
		.map(|dt| dt.with_timezone(&Utc))
		.map_err(|e| DbError::Internal(format!("invalid timestamp {raw:?}: {e}")))
}

impl UnitRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Cheap connectivity check used by the health endpoint.
	pub async fn ping(&self) -> Result<()> {
		sqlx::query("SELECT 1").execute(&self.pool).await?;
		Ok(())
	}

	/// Execute a filtered, paginated search.
	///
	/// The total is counted independently of pagination; a page past the end
	/// of the result set yields empty data, not an error. Store failure
	/// propagates as `DbError` - never a fabricated empty page.
	#[tracing::instrument(skip(self, filters), fields(page = filters.page, limit = filters.limit))]
	pub async fn search(&self, filters: &FilterSpec) -> Result<PageResult<Unit>> {
		let spec = QuerySpec::build(filters);
		let where_clause = spec.where_clause();

		let count_sql = format!("SELECT COUNT(*) as cnt FROM units WHERE {where_clause}");
		let mut count_query = sqlx::query(&count_sql);
		for bind in spec.binds() {
			count_query = match bind {
				BindValue::Text(v) => count_query.bind(v.clone()),
				BindValue::Int(v) => count_query.bind(*v),
				BindValue::Real(v) => count_query.bind(*v),
			};
		}
		let count_row = count_query.fetch_one(&self.pool).await?;
		let total: i64 = count_row.get("cnt");

		let data_sql = format!(
			"SELECT {UNIT_COLUMNS} FROM units WHERE {where_clause} \
			 ORDER BY {} {} LIMIT ? OFFSET ?",
			filters.sort_by.column(),
			filters.sort_order.as_sql()
		);
		let mut data_query = sqlx::query_as::<_, UnitRow>(&data_sql);
		for bind in spec.binds() {
			data_query = match bind {
				BindValue::Text(v) => data_query.bind(v.clone()),
				BindValue::Int(v) => data_query.bind(*v),
				BindValue::Real(v) => data_query.bind(*v),
			};
		}
		let rows = data_query
			.bind(i64::from(filters.limit))
			.bind(filters.offset())
			.fetch_all(&self.pool)
			.await?;

		let units = rows
			.into_iter()
			.map(Unit::try_from)
			.collect::<Result<Vec<_>>>()?;

		let pagination = Pagination::new(filters.page, filters.limit, total.max(0) as u64);
		Ok(PageResult::new(units, pagination))
	}

	#[tracing::instrument(skip(self, unit), fields(unit_id = %unit.id))]
	pub async fn create(&self, unit: &Unit) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO units (
				id, title, title_en, unit_type, unit_type_en, region, region_en,
				project, project_en, project_id, area, bedrooms, bathrooms, price,
				description, description_en, image_urls, latitude, longitude,
				created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&unit.id)
		.bind(&unit.title)
		.bind(&unit.title_en)
		.bind(&unit.unit_type)
		.bind(&unit.unit_type_en)
		.bind(&unit.region)
		.bind(&unit.region_en)
		.bind(&unit.project)
		.bind(&unit.project_en)
		.bind(&unit.project_id)
		.bind(unit.area)
		.bind(unit.bedrooms)
		.bind(unit.bathrooms)
		.bind(unit.price)
		.bind(&unit.description)
		.bind(&unit.description_en)
		.bind(serde_json::to_string(&unit.image_urls)?)
		.bind(unit.latitude)
		.bind(unit.longitude)
		.bind(unit.created_at.to_rfc3339())
		.bind(unit.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, id: &str) -> Result<Option<Unit>> {
		let row: Option<UnitRow> =
			sqlx::query_as(&format!("SELECT {UNIT_COLUMNS} FROM units WHERE id = ?"))
				.bind(id)
				.fetch_optional(&self.pool)
				.await?;

		row.map(Unit::try_from).transpose()
	}

	#[tracing::instrument(skip(self, unit), fields(unit_id = %unit.id))]
	pub async fn update(&self, unit: &Unit) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE units SET
				title = ?, title_en = ?, unit_type = ?, unit_type_en = ?,
				region = ?, region_en = ?, project = ?, project_en = ?,
				project_id = ?, area = ?, bedrooms = ?, bathrooms = ?, price = ?,
				description = ?, description_en = ?, image_urls = ?,
				latitude = ?, longitude = ?, updated_at = ?
			WHERE id = ?
			"#,
		)
		.bind(&unit.title)
		.bind(&unit.title_en)
		.bind(&unit.unit_type)
		.bind(&unit.unit_type_en)
		.bind(&unit.region)
		.bind(&unit.region_en)
		.bind(&unit.project)
		.bind(&unit.project_en)
		.bind(&unit.project_id)
		.bind(unit.area)
		.bind(unit.bedrooms)
		.bind(unit.bathrooms)
		.bind(unit.price)
		.bind(&unit.description)
		.bind(&unit.description_en)
		.bind(serde_json::to_string(&unit.image_urls)?)
		.bind(unit.latitude)
		.bind(unit.longitude)
		.bind(unit.updated_at.to_rfc3339())
		.bind(&unit.id)
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(unit.id.clone()));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, id: &str) -> Result<bool> {
		let result = sqlx::query("DELETE FROM units WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}

#[async_trait]
impl UnitStore for UnitRepository {
	async fn search(&self, filters: &FilterSpec) -> Result<PageResult<Unit>> {
		self.search(filters).await
	}

	async fn create(&self, unit: &Unit) -> Result<()> {
		self.create(unit).await
	}

	async fn get(&self, id: &str) -> Result<Option<Unit>> {
		self.get(id).await
	}

	async fn update(&self, unit: &Unit) -> Result<()> {
		self.update(unit).await
	}

	async fn delete(&self, id: &str) -> Result<bool> {
		self.delete(id).await
	}
}
