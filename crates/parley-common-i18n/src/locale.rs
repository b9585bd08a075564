// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale identifiers and normalization.

use std::fmt;

/// Normalize a locale identifier for registration.
///
/// Surrounding whitespace is trimmed and every `_` region separator becomes
/// `-`. Casing is preserved so the registered spelling is what gets reported
/// back to callers.
///
/// ```
/// use parley_common_i18n::normalize_locale;
///
/// assert_eq!(normalize_locale("pt_BR"), "pt-BR");
/// assert_eq!(normalize_locale(" en "), "en");
/// ```
pub fn normalize_locale(locale: &str) -> String {
	locale.trim().replace('_', "-")
}

/// Key used when comparing two locale identifiers.
///
/// Lowercased, with `_` treated the same as `-`.
pub fn comparison_key(locale: &str) -> String {
	locale.to_lowercase().replace('_', "-")
}

/// A registered locale identifier such as `en` or `pt-BR`.
///
/// Never empty. Equality is exact; use [`LocaleId::matches`] for the
/// case-insensitive comparison used during negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId(String);

impl LocaleId {
	/// Build a locale identifier from raw input, normalizing separators.
	///
	/// Returns `None` when nothing is left after trimming.
	pub fn new(raw: &str) -> Option<Self> {
		let normalized = normalize_locale(raw);
		if normalized.is_empty() {
			None
		} else {
			Some(Self(normalized))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The primary language subtag (`pt` for `pt-BR`).
	pub fn language(&self) -> &str {
		self.0.split('-').next().unwrap_or(&self.0)
	}

	/// The region subtag, if any (`BR` for `pt-BR`).
	pub fn region(&self) -> Option<&str> {
		self.0.split_once('-').map(|(_, region)| region)
	}

	/// Case-insensitive comparison against another identifier.
	pub fn matches(&self, other: &str) -> bool {
		comparison_key(&self.0) == comparison_key(other.trim())
	}
}

impl fmt::Display for LocaleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for LocaleId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
