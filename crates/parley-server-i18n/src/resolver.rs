// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request locale resolution.

use std::sync::Arc;

use http::HeaderMap;
use parley_common_i18n::LocaleCandidate;

use crate::accept_language::preferred_locales;
use crate::registry::TranslationRegistry;
use crate::translation::Translation;

/// Resolves a [`Translation`] for each request from a shared registry.
///
/// Resolution only reads the registry, so one resolver can serve any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct TranslationResolver {
	registry: Arc<TranslationRegistry>,
}

impl TranslationResolver {
	pub fn new(registry: TranslationRegistry) -> Self {
		Self::from_shared(Arc::new(registry))
	}

	pub fn from_shared(registry: Arc<TranslationRegistry>) -> Self {
		Self { registry }
	}

	pub fn registry(&self) -> &TranslationRegistry {
		&self.registry
	}

	/// Bind a catalog for a request based on its `Accept-Language` headers.
	///
	/// With nothing registered the headers are not read at all.
	pub fn resolve(&self, headers: &HeaderMap) -> Translation {
		if self.registry.is_empty() {
			return Translation::bound(Arc::clone(&self.registry), None);
		}
		let preferred = preferred_locales(headers);
		self.resolve_preferences(preferred.as_slice())
	}

	/// Re-resolve a request that an outer layer already bound.
	///
	/// Negotiation runs over the outer registry extended by this one: an
	/// identifier registered on both keeps the outer catalog, and the outer
	/// default locale is kept when it has one. When this registry adds
	/// nothing new the outer binding is returned as is.
	pub fn resolve_nested(&self, outer: &Translation, headers: &HeaderMap) -> Translation {
		let outer_registry = outer.registry();
		if !self.adds_to(outer_registry) {
			return outer.clone();
		}

		let mut merged = TranslationRegistry::clone(outer_registry);
		merged.extend(TranslationRegistry::clone(&self.registry));
		tracing::trace!(available = %merged.available_joined(), "merged nested registrations");
		Self::new(merged).resolve(headers)
	}

	fn adds_to(&self, outer: &Arc<TranslationRegistry>) -> bool {
		if Arc::ptr_eq(outer, &self.registry) {
			return false;
		}
		let adds_default = outer.default_locale().is_none() && self.registry.default_locale().is_some();
		adds_default
			|| self
				.registry
				.available()
				.iter()
				.any(|locale| !outer.available().iter().any(|known| known.matches(locale.as_str())))
	}

	/// Bind a catalog for an already parsed preference list.
	pub fn resolve_preferences<P: LocaleCandidate>(&self, preferred: &[P]) -> Translation {
		let position = self.registry.negotiate(preferred);
		let translation = Translation::bound(Arc::clone(&self.registry), position);
		tracing::debug!(
			locale = translation.locale().unwrap_or("<fallback>"),
			"resolved translation"
		);
		translation
	}
}
