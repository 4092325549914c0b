// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! CORS configuration for the public site frontend.

use serde::Deserialize;

/// CORS configuration (runtime, fully resolved).
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
	/// Origins allowed to call the API. Empty means any origin, which suits
	/// local development only.
	pub allowed_origins: Vec<String>,
}

/// CORS configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfigLayer {
	#[serde(default)]
	pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfigLayer {
	pub fn merge(&mut self, other: CorsConfigLayer) {
		if other.allowed_origins.is_some() {
			self.allowed_origins = other.allowed_origins;
		}
	}

	pub fn finalize(self) -> CorsConfig {
		CorsConfig {
			allowed_origins: self.allowed_origins.unwrap_or_default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_allows_any() {
		assert!(CorsConfigLayer::default().finalize().allowed_origins.is_empty());
	}

	#[test]
	fn test_origin_list() {
		let layer = CorsConfigLayer {
			allowed_origins: Some(vec!["https://aqar.example".to_string()]),
		};
		assert_eq!(layer.finalize().allowed_origins.len(), 1);
	}
}
