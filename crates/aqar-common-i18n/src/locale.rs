// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale tags supported by the site.

/// Suffix naming the secondary-language counterpart of a flat field.
pub const SECONDARY_SUFFIX: &str = "_en";

/// A supported locale. Arabic is the primary (default/fallback) language,
/// English is the secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
	/// Arabic - primary language.
	#[default]
	Ar,
	/// English - secondary language.
	En,
}

impl Locale {
	/// Parse a locale tag.
	///
	/// Total: an unrecognized or empty tag resolves to the primary locale
	/// rather than failing. Locale resolution is not correctness-critical,
	/// so the safe default always wins.
	pub fn parse(tag: &str) -> Self {
		match tag.trim() {
			"en" | "en-US" | "en-GB" => Locale::En,
			"ar" | "ar-EG" | "ar-SA" | "ar-AE" => Locale::Ar,
			other => {
				if !other.is_empty() {
					tracing::debug!(tag = other, "unrecognized locale tag, using primary");
				}
				Locale::Ar
			}
		}
	}

	/// Whether this locale requests the secondary language.
	pub fn is_secondary(self) -> bool {
		matches!(self, Locale::En)
	}

	/// Whether text in this locale renders right-to-left.
	pub fn is_rtl(self) -> bool {
		matches!(self, Locale::Ar)
	}

	/// The canonical tag for this locale.
	pub fn as_str(self) -> &'static str {
		match self {
			Locale::Ar => "ar",
			Locale::En => "en",
		}
	}
}

impl std::fmt::Display for Locale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_tags() {
		assert_eq!(Locale::parse("ar"), Locale::Ar);
		assert_eq!(Locale::parse("en"), Locale::En);
		assert_eq!(Locale::parse("en-US"), Locale::En);
		assert_eq!(Locale::parse("ar-EG"), Locale::Ar);
	}

	#[test]
	fn test_parse_unknown_tag_falls_back_to_primary() {
		assert_eq!(Locale::parse("fr"), Locale::Ar);
		assert_eq!(Locale::parse("invalid"), Locale::Ar);
	}

	#[test]
	fn test_parse_empty_tag_falls_back_to_primary() {
		assert_eq!(Locale::parse(""), Locale::Ar);
		assert_eq!(Locale::parse("   "), Locale::Ar);
	}

	#[test]
	fn test_direction() {
		assert!(Locale::Ar.is_rtl());
		assert!(!Locale::En.is_rtl());
	}

	#[test]
	fn test_display_roundtrip() {
		assert_eq!(Locale::parse(Locale::En.as_str()), Locale::En);
		assert_eq!(Locale::parse(Locale::Ar.as_str()), Locale::Ar);
	}
}
