// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation configuration: where catalogs live and the default locale.

use std::path::PathBuf;

use serde::Deserialize;

/// Translation configuration (runtime, fully resolved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nConfig {
	/// Directory of `<locale>.json` / `<locale>.toml` catalogs. `None` means
	/// the server starts with no phrases.
	pub phrases_dir: Option<PathBuf>,
	/// Locale bound when nothing in `Accept-Language` matches.
	pub default_locale: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub phrases_dir: Option<String>,
	#[serde(default)]
	pub default_locale: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.phrases_dir.is_some() {
			self.phrases_dir = other.phrases_dir;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
	}

	/// Blank values resolve to `None`.
	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			phrases_dir: non_blank(self.phrases_dir).map(PathBuf::from),
			default_locale: non_blank(self.default_locale),
		}
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
}
