// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bilingual fallback resolution.

use serde_json::Value;

use crate::locale::{Locale, SECONDARY_SUFFIX};

/// Resolve the display string for a bilingual field.
///
/// Resolution order:
/// 1. The secondary value, when the active locale is secondary and the value
///    is present and non-empty
/// 2. The primary value, when present and non-empty
/// 3. The secondary value, when present
/// 4. Empty string
///
/// Total and pure: absent inputs degrade to an empty string, never an error.
pub fn resolve_field(primary: Option<&str>, secondary: Option<&str>, locale: Locale) -> String {
	if locale.is_secondary() {
		if let Some(s) = secondary {
			if !s.is_empty() {
				return s.to_string();
			}
		}
	}

	match primary {
		Some(p) if !p.is_empty() => p.to_string(),
		_ => secondary.unwrap_or_default().to_string(),
	}
}

/// Resolve a bilingual field on a JSON record.
///
/// The primary value is read from `record[field]` and the secondary from
/// `record[field + "_en"]`. When `record[field]` is itself a language map
/// (`{"ar": ..., "en": ...}`), the pair is taken from its sub-keys instead;
/// a flat `_en` sibling still serves as the secondary if the map lacks one.
///
/// Always returns a string, possibly empty.
pub fn resolve_object_field(record: &Value, field: &str, locale: Locale) -> String {
	let (primary, secondary) = localized_pair(record, field);
	resolve_field(primary, secondary, locale)
}

/// Resolve a bilingual field across a sequence of JSON records.
///
/// Produces a new vector where `field` on every object is replaced with its
/// resolved string; all other fields pass through unchanged. Non-object
/// elements pass through untouched.
pub fn resolve_array_field(records: &[Value], field: &str, locale: Locale) -> Vec<Value> {
	records
		.iter()
		.map(|record| match record {
			Value::Object(_) => {
				let resolved = resolve_object_field(record, field, locale);
				let mut out = record.clone();
				if let Value::Object(map) = &mut out {
					map.insert(field.to_string(), Value::String(resolved));
				}
				out
			}
			other => other.clone(),
		})
		.collect()
}

/// Normalize the two storage shapes to a single `(primary, secondary)` pair.
fn localized_pair<'a>(record: &'a Value, field: &str) -> (Option<&'a str>, Option<&'a str>) {
	let flat_secondary = record
		.get(format!("{field}{SECONDARY_SUFFIX}"))
		.and_then(Value::as_str);

	match record.get(field) {
		Some(Value::String(s)) => (Some(s.as_str()), flat_secondary),
		Some(Value::Object(map)) => {
			let primary = map.get(Locale::Ar.as_str()).and_then(Value::as_str);
			let secondary = map
				.get(Locale::En.as_str())
				.and_then(Value::as_str)
				.or(flat_secondary);
			(primary, secondary)
		}
		_ => (None, flat_secondary),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_secondary_locale_prefers_secondary_value() {
		assert_eq!(
			resolve_field(Some("شقة"), Some("Apartment"), Locale::En),
			"Apartment"
		);
	}

	#[test]
	fn test_primary_locale_ignores_secondary_value() {
		assert_eq!(resolve_field(Some("شقة"), Some("Apartment"), Locale::Ar), "شقة");
	}

	#[test]
	fn test_empty_secondary_falls_back_to_primary() {
		// Fixture: {title: "Unit A", title_en: ""} resolved for English.
		let record = json!({"title": "Unit A", "title_en": ""});
		assert_eq!(resolve_object_field(&record, "title", Locale::En), "Unit A");
	}

	#[test]
	fn test_absent_secondary_falls_back_to_primary() {
		let record = json!({"title": "وحدة"});
		assert_eq!(resolve_object_field(&record, "title", Locale::En), "وحدة");
	}

	#[test]
	fn test_absent_primary_falls_back_to_secondary() {
		let record = json!({"title_en": "Unit B"});
		assert_eq!(resolve_object_field(&record, "title", Locale::Ar), "Unit B");
	}

	#[test]
	fn test_both_absent_yields_empty_string() {
		let record = json!({"price": 500000});
		assert_eq!(resolve_object_field(&record, "title", Locale::Ar), "");
		assert_eq!(resolve_object_field(&record, "title", Locale::En), "");
	}

	#[test]
	fn test_empty_primary_yields_secondary() {
		assert_eq!(resolve_field(Some(""), Some("Unit C"), Locale::Ar), "Unit C");
	}

	#[test]
	fn test_nested_language_map_is_normalized() {
		let record = json!({"title": {"ar": "شقة", "en": "Apartment"}});
		assert_eq!(resolve_object_field(&record, "title", Locale::En), "Apartment");
		assert_eq!(resolve_object_field(&record, "title", Locale::Ar), "شقة");
	}

	#[test]
	fn test_nested_map_without_en_uses_flat_sibling() {
		let record = json!({"title": {"ar": "شقة"}, "title_en": "Flat"});
		assert_eq!(resolve_object_field(&record, "title", Locale::En), "Flat");
	}

	#[test]
	fn test_non_string_field_degrades_to_secondary_or_empty() {
		let record = json!({"title": 42, "title_en": "Number"});
		assert_eq!(resolve_object_field(&record, "title", Locale::Ar), "Number");

		let record = json!({"title": 42});
		assert_eq!(resolve_object_field(&record, "title", Locale::Ar), "");
	}

	#[test]
	fn test_array_resolution_replaces_field_only() {
		let records = vec![
			json!({"title": "شقة", "title_en": "Apartment", "price": 750000}),
			json!({"title": "فيلا", "price": 2000000}),
		];

		let resolved = resolve_array_field(&records, "title", Locale::En);

		assert_eq!(resolved[0]["title"], "Apartment");
		assert_eq!(resolved[0]["title_en"], "Apartment");
		assert_eq!(resolved[0]["price"], 750000);
		assert_eq!(resolved[1]["title"], "فيلا");
		assert_eq!(resolved[1]["price"], 2000000);

		// Inputs are untouched
		assert_eq!(records[0]["title"], "شقة");
	}

	#[test]
	fn test_array_resolution_passes_non_objects_through() {
		let records = vec![json!("plain"), json!(7)];
		let resolved = resolve_array_field(&records, "title", Locale::En);
		assert_eq!(resolved, records);
	}

	mod properties {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			// Resolution is total: any combination of inputs yields a string.
			#[test]
			fn resolve_field_is_total(
				primary in proptest::option::of(".*"),
				secondary in proptest::option::of(".*"),
				secondary_locale in proptest::bool::ANY,
			) {
				let locale = if secondary_locale { Locale::En } else { Locale::Ar };
				let out = resolve_field(primary.as_deref(), secondary.as_deref(), locale);
				if primary.as_deref().map_or(true, str::is_empty)
					&& secondary.as_deref().map_or(true, str::is_empty)
				{
					prop_assert_eq!(out, "");
				} else {
					prop_assert!(!out.is_empty());
				}
			}

			// The result always comes from one of the two inputs.
			#[test]
			fn resolve_field_never_invents_text(
				primary in proptest::option::of(".*"),
				secondary in proptest::option::of(".*"),
				secondary_locale in proptest::bool::ANY,
			) {
				let locale = if secondary_locale { Locale::En } else { Locale::Ar };
				let out = resolve_field(primary.as_deref(), secondary.as_deref(), locale);
				prop_assert!(
					out.is_empty()
						|| primary.as_deref() == Some(out.as_str())
						|| secondary.as_deref() == Some(out.as_str())
				);
			}
		}
	}
}
