// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation.
//!
//! Matching is preference-major: each preferred locale is tried against the
//! whole available list (exact pass, then prefix pass) before the next
//! preferred locale is considered. A prefix hit for the first preference
//! therefore beats an exact hit for the second:
//!
//! ```
//! use parley_common_i18n::find_best_locale;
//!
//! assert_eq!(
//!     find_best_locale(&["en", "fr-FR"], &["fr-FR", "en-GB"]).as_deref(),
//!     Some("en-GB"),
//! );
//! ```

use serde_json::Value;

use crate::locale::{comparison_key, LocaleId};

/// An entry of a preference or availability list.
///
/// Entries that are not strings yield `None` and are skipped by
/// [`find_best_locale`] without affecting the other entries.
pub trait LocaleCandidate {
	fn candidate(&self) -> Option<&str>;
}

impl LocaleCandidate for str {
	fn candidate(&self) -> Option<&str> {
		Some(self)
	}
}

impl LocaleCandidate for String {
	fn candidate(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl LocaleCandidate for LocaleId {
	fn candidate(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl LocaleCandidate for Value {
	fn candidate(&self) -> Option<&str> {
		self.as_str()
	}
}

impl<T: LocaleCandidate> LocaleCandidate for Option<T> {
	fn candidate(&self) -> Option<&str> {
		self.as_ref().and_then(LocaleCandidate::candidate)
	}
}

impl<T: LocaleCandidate + ?Sized> LocaleCandidate for &T {
	fn candidate(&self) -> Option<&str> {
		(**self).candidate()
	}
}

/// Find the best available locale for an ordered list of preferences.
///
/// For each preferred entry, in order:
///
/// 1. the first available entry equal to it (case-insensitive) wins;
/// 2. otherwise the first available entry where one is a prefix of the other
///    (`en` / `en-US`, either direction) wins;
/// 3. otherwise the next preferred entry is tried.
///
/// The returned value is the available entry as registered, with its own
/// casing. Empty entries never match, non-string entries are skipped, and an
/// empty list on either side yields `None`.
///
/// ```
/// use parley_common_i18n::find_best_locale;
///
/// assert_eq!(find_best_locale(&["EN-us"], &["en-US"]).as_deref(), Some("en-US"));
/// assert_eq!(find_best_locale(&["en-US"], &["en"]).as_deref(), Some("en"));
/// assert_eq!(find_best_locale(&["de"], &["en"]), None);
/// ```
pub fn find_best_locale<P, A>(preferred: &[P], available: &[A]) -> Option<String>
where
	P: LocaleCandidate,
	A: LocaleCandidate,
{
	if preferred.is_empty() || available.is_empty() {
		return None;
	}

	let available: Vec<(&str, String)> = available
		.iter()
		.filter_map(LocaleCandidate::candidate)
		.filter(|locale| !locale.is_empty())
		.map(|locale| (locale, comparison_key(locale)))
		.collect();

	for preferred in preferred.iter().filter_map(LocaleCandidate::candidate) {
		if preferred.is_empty() {
			continue;
		}
		let wanted = comparison_key(preferred);

		if let Some((locale, _)) = available.iter().find(|(_, key)| *key == wanted) {
			tracing::trace!(preferred, locale, "exact locale match");
			return Some((*locale).to_string());
		}

		if let Some((locale, _)) = available
			.iter()
			.find(|(_, key)| key.starts_with(&wanted) || wanted.starts_with(key.as_str()))
		{
			tracing::trace!(preferred, locale, "prefix locale match");
			return Some((*locale).to_string());
		}
	}

	None
}

/// [`find_best_locale`] over loosely typed input.
///
/// Anything other than a JSON array on either side (null, a string, an
/// object) yields `None`; inside the arrays, non-string elements are skipped.
pub fn find_best_locale_json(preferred: &Value, available: &Value) -> Option<String> {
	match (preferred.as_array(), available.as_array()) {
		(Some(preferred), Some(available)) => {
			find_best_locale(preferred.as_slice(), available.as_slice())
		}
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	const NONE: &[&str] = &[];

	#[test]
	fn test_empty_inputs_do_not_match() {
		assert_eq!(find_best_locale(NONE, &["en-US"]), None);
		assert_eq!(find_best_locale(&["en-US"], NONE), None);
		assert_eq!(find_best_locale(NONE, NONE), None);
	}

	#[test]
	fn test_missing_or_non_sequence_inputs_do_not_match() {
		assert_eq!(find_best_locale_json(&Value::Null, &json!(["en-US"])), None);
		assert_eq!(find_best_locale_json(&json!(["en-US"]), &Value::Null), None);
		assert_eq!(find_best_locale_json(&json!("en-US"), &json!(["en-US"])), None);
		assert_eq!(find_best_locale_json(&json!(["en-US"]), &json!({"en": 1})), None);
		assert_eq!(find_best_locale_json(&json!([]), &json!(["en-US"])), None);
	}

	#[test]
	fn test_exact_match() {
		assert_eq!(
			find_best_locale(&["en-US"], &["es-ES", "en-US"]).as_deref(),
			Some("en-US")
		);
	}

	#[test]
	fn test_case_insensitive_match_keeps_available_casing() {
		assert_eq!(
			find_best_locale(&["EN-us"], &["en-US"]).as_deref(),
			Some("en-US")
		);
	}

	#[test]
	fn test_underscore_and_hyphen_compare_equal() {
		assert_eq!(
			find_best_locale(&["pt_BR"], &["en", "pt-BR"]).as_deref(),
			Some("pt-BR")
		);
	}

	#[test]
	fn test_preferred_order_wins_over_available_order() {
		assert_eq!(
			find_best_locale(&["fr-FR", "en-US"], &["en-US", "fr-FR"]).as_deref(),
			Some("fr-FR")
		);
	}

	#[test]
	fn test_prefix_match_both_directions() {
		assert_eq!(
			find_best_locale(&["en"], &["en-US"]).as_deref(),
			Some("en-US")
		);
		assert_eq!(
			find_best_locale(&["en-US"], &["en"]).as_deref(),
			Some("en")
		);
	}

	#[test]
	fn test_exact_match_beats_prefix_for_same_preference() {
		assert_eq!(
			find_best_locale(&["pt"], &["pt-BR", "pt"]).as_deref(),
			Some("pt")
		);
	}

	#[test]
	fn test_prefix_for_earlier_preference_beats_exact_for_later() {
		assert_eq!(
			find_best_locale(&["en", "fr-FR"], &["fr-FR", "en-GB"]).as_deref(),
			Some("en-GB")
		);
	}

	#[test]
	fn test_first_prefix_candidate_in_available_order() {
		assert_eq!(
			find_best_locale(&["en"], &["en-GB", "en-US"]).as_deref(),
			Some("en-GB")
		);
	}

	#[test]
	fn test_non_string_entries_are_skipped() {
		let preferred = json!([123, "en-US", null]);
		let available = json!(["es-ES", "en-US"]);
		assert_eq!(
			find_best_locale_json(&preferred, &available).as_deref(),
			Some("en-US")
		);

		let available = json!([{}, 7, "en-US"]);
		assert_eq!(
			find_best_locale_json(&json!(["en-US"]), &available).as_deref(),
			Some("en-US")
		);
	}

	#[test]
	fn test_option_entries_are_skipped() {
		let preferred = [None, Some("it")];
		assert_eq!(
			find_best_locale(&preferred, &["en", "it"]).as_deref(),
			Some("it")
		);
	}

	#[test]
	fn test_empty_strings_never_match() {
		assert_eq!(find_best_locale(&[""], &["en-US"]), None);
		assert_eq!(find_best_locale(&["en-US"], &[""]), None);
	}

	#[test]
	fn test_empty_strings_do_not_block_other_entries() {
		assert_eq!(
			find_best_locale(&["", "it"], &["", "it"]).as_deref(),
			Some("it")
		);
	}

	#[test]
	fn test_no_match() {
		assert_eq!(find_best_locale(&["de-DE"], &["en", "it", "pt-BR"]), None);
	}

	proptest! {
		#[test]
		fn self_match_returns_first_available(
			available in prop::collection::vec("[a-zA-Z]{1,3}(-[a-zA-Z]{2})?", 1..8)
		) {
			let found = find_best_locale(available.as_slice(), available.as_slice());
			prop_assert_eq!(found.as_deref(), Some(available[0].as_str()));
		}

		#[test]
		fn empty_preferences_never_match(
			available in prop::collection::vec("[a-z]{2}", 0..8)
		) {
			prop_assert_eq!(find_best_locale(NONE, available.as_slice()), None);
		}

		#[test]
		fn result_is_always_an_available_entry(
			preferred in prop::collection::vec("[a-zA-Z_-]{0,6}", 0..6),
			available in prop::collection::vec("[a-zA-Z_-]{0,6}", 0..6),
		) {
			if let Some(found) = find_best_locale(preferred.as_slice(), available.as_slice()) {
				prop_assert!(available.contains(&found));
			}
		}
	}
}
