// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error type mapped onto HTTP responses.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use aqar_server_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("bad request: {0}")]
	BadRequest(String),

	#[error("not found: {0}")]
	NotFound(String),

	#[error("unauthorized")]
	Unauthorized,

	#[error("forbidden")]
	Forbidden,

	#[error("database error: {0}")]
	Database(DbError),

	#[error("internal error: {0}")]
	Internal(String),
}

impl From<DbError> for ServerError {
	fn from(e: DbError) -> Self {
		match e {
			DbError::NotFound(id) => ServerError::NotFound(id),
			// A payload naming a missing developer/project is a client
			// mistake, not a server fault.
			DbError::ForeignKey(msg) => {
				ServerError::BadRequest(format!("referenced record does not exist: {msg}"))
			}
			other => ServerError::Database(other),
		}
	}
}

/// JSON error body: `{ "error": "...", "message": "..." }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> axum::response::Response {
		let (status, error) = match &self {
			ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
			ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
			ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
			ServerError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
			ServerError::Database(_) | ServerError::Internal(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
			}
		};

		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!(error = %self, "request failed");
		}

		let body = ErrorResponse {
			error: error.to_string(),
			message: self.to_string(),
		};
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_db_not_found_maps_to_404() {
		let err: ServerError = DbError::NotFound("abc".to_string()).into();
		assert!(matches!(err, ServerError::NotFound(_)));
	}

	#[test]
	fn test_foreign_key_violation_maps_to_400() {
		let err: ServerError = DbError::ForeignKey("FOREIGN KEY constraint failed".to_string()).into();
		assert!(matches!(err, ServerError::BadRequest(_)));
	}

	#[test]
	fn test_other_db_errors_stay_internal() {
		let err: ServerError = DbError::Internal("boom".to_string()).into();
		assert!(matches!(err, ServerError::Database(_)));
	}
}
