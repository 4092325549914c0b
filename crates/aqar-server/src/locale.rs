// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request locale negotiation.
//!
//! The `lang` query parameter wins, then the first `Accept-Language` tag,
//! then the site default (Arabic). Unknown tags fall back to Arabic inside
//! [`Locale::parse`], so extraction never fails.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use aqar_common_i18n::Locale;

/// The negotiated locale for a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLocale(pub Locale);

fn lang_query_param(query: &str) -> Option<&str> {
	query.split('&').find_map(|pair| {
		let (key, value) = pair.split_once('=')?;
		(key == "lang" && !value.is_empty()).then_some(value)
	})
}

fn first_accept_language_tag(value: &str) -> Option<&str> {
	let first = value.split(',').next()?;
	let tag = first.split(';').next()?.trim();
	(!tag.is_empty()).then_some(tag)
}

impl<S: Send + Sync> FromRequestParts<S> for RequestLocale {
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(lang) = parts.uri.query().and_then(lang_query_param) {
			return Ok(RequestLocale(Locale::parse(lang)));
		}

		let locale = parts
			.headers
			.get(header::ACCEPT_LANGUAGE)
			.and_then(|v| v.to_str().ok())
			.and_then(first_accept_language_tag)
			.map(Locale::parse)
			.unwrap_or_default();

		Ok(RequestLocale(locale))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lang_param_extraction() {
		assert_eq!(lang_query_param("lang=en"), Some("en"));
		assert_eq!(lang_query_param("page=2&lang=ar&limit=10"), Some("ar"));
		assert_eq!(lang_query_param("lang="), None);
		assert_eq!(lang_query_param("language=en"), None);
	}

	#[test]
	fn test_accept_language_first_tag() {
		assert_eq!(
			first_accept_language_tag("en-US,en;q=0.9,ar;q=0.8"),
			Some("en-US")
		);
		assert_eq!(first_accept_language_tag("ar"), Some("ar"));
		assert_eq!(first_accept_language_tag(""), None);
	}

	#[test]
	fn test_parse_falls_back_to_arabic() {
		assert_eq!(Locale::parse("en-US"), Locale::En);
		assert_eq!(Locale::parse("fr"), Locale::Ar);
	}
}
