// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The per-request translation binding.

use std::sync::Arc;

use parley_common_i18n::{LocaleId, PhraseCatalog};

use crate::registry::TranslationRegistry;

/// One catalog bound to one request: the negotiated locale's, or the
/// pass-through fallback.
///
/// Cheap to clone (an `Arc` to the registry plus an index). Created by the
/// translation layer and dropped with the request.
#[derive(Debug, Clone)]
pub struct Translation {
	registry: Arc<TranslationRegistry>,
	position: Option<usize>,
}

impl Translation {
	/// A binding to the fallback catalog with nothing registered.
	pub fn fallback() -> Self {
		Self {
			registry: Arc::new(TranslationRegistry::new()),
			position: None,
		}
	}

	pub(crate) fn bound(registry: Arc<TranslationRegistry>, position: Option<usize>) -> Self {
		Self { registry, position }
	}

	pub(crate) fn registry(&self) -> &Arc<TranslationRegistry> {
		&self.registry
	}

	/// The locale that was bound, as registered. `None` for the fallback.
	pub fn locale(&self) -> Option<&str> {
		self.entry().map(|(locale, _)| locale.as_str())
	}

	pub fn is_fallback(&self) -> bool {
		self.entry().is_none()
	}

	/// The bound catalog.
	pub fn catalog(&self) -> &PhraseCatalog {
		self
			.entry()
			.map(|(_, catalog)| catalog)
			.unwrap_or_else(|| PhraseCatalog::fallback())
	}

	/// Translate a dotted key; unknown keys come back unchanged.
	pub fn t(&self, key: &str) -> String {
		self.catalog().t(key)
	}

	/// Translate a dotted key and substitute `%{name}` placeholders.
	pub fn t_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		self.catalog().t_fmt(key, args)
	}

	pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
		self.catalog().lookup(key)
	}

	/// Every registered locale, in registration order.
	pub fn available(&self) -> &[LocaleId] {
		self.registry.available()
	}

	/// The catalog of a specific registered locale, regardless of the bound one.
	pub fn for_locale(&self, locale: &str) -> Option<&PhraseCatalog> {
		self.registry.catalog(locale)
	}

	fn entry(&self) -> Option<(&LocaleId, &PhraseCatalog)> {
		self.position.and_then(|position| self.registry.entry(position))
	}
}

impl Default for Translation {
	fn default() -> Self {
		Self::fallback()
	}
}
