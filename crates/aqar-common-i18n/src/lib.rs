// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bilingual field resolution for Aqar.
//!
//! Listing records carry Arabic text as the primary value and an optional
//! English override. Two storage shapes occur at the data boundary:
//!
//! - flat: a base field plus an `_en`-suffixed counterpart
//!   (`{"title": "شقة", "title_en": "Apartment"}`)
//! - nested: the base field is itself a language map
//!   (`{"title": {"ar": "شقة", "en": "Apartment"}}`)
//!
//! Both shapes are normalized to a single `(primary, secondary)` pair before
//! the fallback rule is applied, so callers never branch on representation.
//!
//! # Example
//!
//! ```
//! use aqar_common_i18n::{resolve_field, Locale};
//!
//! // English requested and available
//! assert_eq!(resolve_field(Some("شقة"), Some("Apartment"), Locale::En), "Apartment");
//!
//! // English requested but empty: fall back to Arabic
//! assert_eq!(resolve_field(Some("شقة"), Some(""), Locale::En), "شقة");
//! ```
//!
//! The active locale is always an explicit argument. There is no ambient
//! locale state anywhere in this crate.

mod locale;
mod resolve;

pub use locale::{Locale, SECONDARY_SUFFIX};
pub use resolve::{resolve_array_field, resolve_field, resolve_object_field};
