// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::comparison_key;
use crate::matcher::{find_best_locale, LocaleCandidate};

/// Resolve the effective locale from client preferences and a server default.
///
/// Resolution order (highest to lowest priority):
/// 1. Best match of `preferred` against `available` (see [`find_best_locale`])
/// 2. `default_locale`, if it is non-empty and one of `available`
/// 3. `None`: the caller falls back to the pass-through catalog
///
/// The returned value is always spelled as in `available`.
///
/// # Example
///
/// ```
/// use parley_common_i18n::resolve_locale;
///
/// let available = ["en", "it", "pt-BR"];
///
/// // Client preference takes priority
/// assert_eq!(resolve_locale(&["it", "en"], &available, Some("en")).as_deref(), Some("it"));
///
/// // Falls back to the server default if nothing matches
/// assert_eq!(resolve_locale(&["de-DE"], &available, Some("en")).as_deref(), Some("en"));
///
/// // Nothing at all if the default is not registered either
/// assert_eq!(resolve_locale(&["de-DE"], &available, Some("fr")), None);
/// ```
pub fn resolve_locale<P, A>(
	preferred: &[P],
	available: &[A],
	default_locale: Option<&str>,
) -> Option<String>
where
	P: LocaleCandidate,
	A: LocaleCandidate,
{
	if let Some(locale) = find_best_locale(preferred, available) {
		return Some(locale);
	}

	let default_locale = default_locale.map(str::trim).filter(|d| !d.is_empty())?;
	let wanted = comparison_key(default_locale);
	available
		.iter()
		.filter_map(LocaleCandidate::candidate)
		.find(|locale| comparison_key(locale) == wanted)
		.map(str::to_string)
}
