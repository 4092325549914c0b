// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Staff authentication extractor.
//!
//! Staff endpoints expect `Authorization: Bearer <token>`. The token is
//! hashed and looked up in `staff_tokens`; the stored role decides whether
//! admin-only actions are allowed.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use aqar_server_db::{hash_token, ROLE_ADMIN};

use crate::{api::AppState, error::ServerError};

/// Authenticated staff identity, extracted per request.
#[derive(Debug, Clone)]
pub struct StaffAuth {
	pub role: String,
}

impl StaffAuth {
	pub fn is_admin(&self) -> bool {
		self.role == ROLE_ADMIN
	}

	/// Guard for admin-only handlers.
	pub fn require_admin(&self) -> Result<(), ServerError> {
		if self.is_admin() {
			Ok(())
		} else {
			Err(ServerError::Forbidden)
		}
	}
}

impl FromRequestParts<AppState> for StaffAuth {
	type Rejection = ServerError;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		let header_value = parts
			.headers
			.get(header::AUTHORIZATION)
			.and_then(|v| v.to_str().ok())
			.ok_or(ServerError::Unauthorized)?;

		let token = header_value
			.strip_prefix("Bearer ")
			.ok_or(ServerError::Unauthorized)?
			.trim();
		if token.is_empty() {
			return Err(ServerError::Unauthorized);
		}

		let role = state
			.staff
			.get_role_by_token_hash(&hash_token(token))
			.await?
			.ok_or_else(|| {
				tracing::debug!("rejected unknown staff token");
				ServerError::Unauthorized
			})?;

		Ok(StaffAuth { role })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use aqar_server_db::ROLE_SALES;

	#[test]
	fn test_admin_guard() {
		let admin = StaffAuth {
			role: ROLE_ADMIN.to_string(),
		};
		assert!(admin.require_admin().is_ok());

		let sales = StaffAuth {
			role: ROLE_SALES.to_string(),
		};
		assert!(matches!(
			sales.require_admin(),
			Err(ServerError::Forbidden)
		));
	}
}
