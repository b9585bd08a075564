// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `Accept-Language` parsing.
//!
//! Only the order of the tags matters. Parameters after `;` (including
//! `q=` weights) are dropped.

use http::header::ACCEPT_LANGUAGE;
use http::HeaderMap;

/// Split an `Accept-Language` value into its tags, in order of appearance.
///
/// ```
/// use parley_server_i18n::parse_accept_language;
///
/// assert_eq!(
///     parse_accept_language("it;q=0.5, en-US, pt-BR;q=0.9"),
///     vec!["it", "en-US", "pt-BR"],
/// );
/// ```
pub fn parse_accept_language(value: &str) -> Vec<&str> {
	value
		.split(',')
		.map(|part| part.split(';').next().unwrap_or_default().trim())
		.filter(|tag| !tag.is_empty())
		.collect()
}

/// Preference list for a request.
///
/// Every `Accept-Language` header is read in order. A missing header, or a
/// value that is not valid visible ASCII, contributes nothing.
pub fn preferred_locales(headers: &HeaderMap) -> Vec<String> {
	headers
		.get_all(ACCEPT_LANGUAGE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(parse_accept_language)
		.map(str::to_string)
		.collect()
}
