// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schema setup, run once at startup.

use sqlx::sqlite::SqlitePool;

use crate::error::Result;

const STATEMENTS: &[&str] = &[
	r#"
	CREATE TABLE IF NOT EXISTS units (
		id TEXT PRIMARY KEY,
		title TEXT NOT NULL,
		title_en TEXT,
		unit_type TEXT NOT NULL,
		unit_type_en TEXT,
		region TEXT NOT NULL,
		region_en TEXT,
		project TEXT NOT NULL,
		project_en TEXT,
		project_id TEXT REFERENCES projects(id) ON DELETE SET NULL,
		area REAL NOT NULL,
		bedrooms INTEGER NOT NULL,
		bathrooms INTEGER NOT NULL,
		price REAL NOT NULL,
		description TEXT,
		description_en TEXT,
		image_urls TEXT NOT NULL DEFAULT '[]',
		latitude REAL,
		longitude REAL,
		created_at TEXT NOT NULL,
		updated_at TEXT NOT NULL
	)
	"#,
	"CREATE INDEX IF NOT EXISTS idx_units_price ON units(price)",
	"CREATE INDEX IF NOT EXISTS idx_units_project_id ON units(project_id)",
	"CREATE INDEX IF NOT EXISTS idx_units_created_at ON units(created_at)",
	r#"
	CREATE TABLE IF NOT EXISTS developers (
		id TEXT PRIMARY KEY,
		name TEXT NOT NULL,
		name_en TEXT,
		description TEXT,
		description_en TEXT,
		logo_url TEXT,
		created_at TEXT NOT NULL,
		updated_at TEXT NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS projects (
		id TEXT PRIMARY KEY,
		developer_id TEXT REFERENCES developers(id) ON DELETE SET NULL,
		name TEXT NOT NULL,
		name_en TEXT,
		region TEXT NOT NULL,
		region_en TEXT,
		description TEXT,
		description_en TEXT,
		latitude REAL,
		longitude REAL,
		image_urls TEXT NOT NULL DEFAULT '[]',
		created_at TEXT NOT NULL,
		updated_at TEXT NOT NULL
	)
	"#,
	"CREATE INDEX IF NOT EXISTS idx_projects_developer_id ON projects(developer_id)",
	r#"
	CREATE TABLE IF NOT EXISTS consultations (
		id TEXT PRIMARY KEY,
		name TEXT NOT NULL,
		phone TEXT NOT NULL,
		email TEXT,
		message TEXT,
		created_at TEXT NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS reviews (
		id TEXT PRIMARY KEY,
		name TEXT NOT NULL,
		rating INTEGER NOT NULL,
		comment TEXT,
		approved INTEGER NOT NULL DEFAULT 0,
		created_at TEXT NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS staff_tokens (
		token_hash TEXT PRIMARY KEY,
		role TEXT NOT NULL,
		label TEXT NOT NULL,
		created_at TEXT NOT NULL
	)
	"#,
];

/// Apply the schema. Idempotent; safe to run on every startup.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
	for statement in STATEMENTS {
		sqlx::query(statement).execute(pool).await?;
	}
	tracing::debug!("schema applied");
	Ok(())
}
