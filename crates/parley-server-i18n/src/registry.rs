// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Registered locales and their catalogs.
//!
//! The registry is filled once at startup and then shared read-only behind
//! an `Arc`. Registration is insert-if-absent: the first catalog registered
//! for a locale identifier stays, later ones for the same identifier are
//! ignored.

use std::collections::HashMap;

use parley_common_i18n::{
	comparison_key, resolve_locale, LocaleCandidate, LocaleId, PhraseCatalog, PhraseSources,
};
use tracing::{debug, info, warn};

/// Warning code emitted when a registration carries no phrases at all.
pub const NO_PHRASES_WARNING_CODE: &str = "PARLEY_WARN_NO_PHRASES";

#[derive(Debug, Clone, Default)]
pub struct TranslationRegistry {
	locales: Vec<LocaleId>,
	catalogs: Vec<PhraseCatalog>,
	index: HashMap<String, usize>,
	default_locale: Option<String>,
}

impl TranslationRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a registry from a full registration mapping.
	///
	/// An empty mapping is not an error: a warning is logged and every
	/// lookup will return its key.
	pub fn from_sources(sources: PhraseSources) -> Self {
		let mut registry = Self::new();
		registry.register_all(sources);
		registry
	}

	/// Set the locale used when nothing in the request matches.
	///
	/// Blank values clear it. The default only takes effect when it names a
	/// registered locale.
	pub fn with_default_locale(mut self, locale: Option<impl Into<String>>) -> Self {
		self.default_locale = locale
			.map(Into::into)
			.map(|l: String| l.trim().to_string())
			.filter(|l| !l.is_empty());
		self
	}

	/// Register one catalog. Returns `false` if the identifier is blank or
	/// already registered, in which case nothing changes.
	pub fn register(&mut self, locale: &str, catalog: PhraseCatalog) -> bool {
		let Some(locale) = LocaleId::new(locale) else {
			debug!("skipping blank locale identifier");
			return false;
		};

		let key = comparison_key(locale.as_str());
		if self.index.contains_key(&key) {
			debug!(locale = %locale, "locale already registered, keeping first catalog");
			return false;
		}

		debug!(locale = %locale, phrases = catalog.phrase_count(), "registered locale");
		self.index.insert(key, self.locales.len());
		self.locales.push(locale);
		self.catalogs.push(catalog);
		true
	}

	/// Register every catalog of a mapping. Returns how many were added.
	pub fn register_all(&mut self, sources: PhraseSources) -> usize {
		if sources.is_empty() {
			warn!(
				code = NO_PHRASES_WARNING_CODE,
				"No phrases registered; lookups will return keys"
			);
			return 0;
		}

		let mut added = 0;
		for (locale, catalog) in sources {
			if self.register(&locale, catalog) {
				added += 1;
			}
		}

		info!(
			added,
			available = %self.available_joined(),
			"translations registered"
		);
		added
	}

	/// Layer another registry under this one.
	///
	/// Locales already present here keep their catalog; the other
	/// registry's default is only used if this one has none.
	pub fn extend(&mut self, other: TranslationRegistry) {
		if self.default_locale.is_none() {
			self.default_locale = other.default_locale;
		}
		for (locale, catalog) in other.locales.into_iter().zip(other.catalogs) {
			self.register(locale.as_str(), catalog);
		}
	}

	/// Registered locale identifiers, in registration order.
	pub fn available(&self) -> &[LocaleId] {
		&self.locales
	}

	/// Registered locale identifiers joined with `,`.
	pub fn available_joined(&self) -> String {
		self
			.locales
			.iter()
			.map(LocaleId::as_str)
			.collect::<Vec<_>>()
			.join(",")
	}

	pub fn default_locale(&self) -> Option<&str> {
		self.default_locale.as_deref()
	}

	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}

	pub fn len(&self) -> usize {
		self.locales.len()
	}

	/// Catalog registered for a locale (case-insensitive, `_` or `-`).
	pub fn catalog(&self, locale: &str) -> Option<&PhraseCatalog> {
		self.position(locale).map(|i| &self.catalogs[i])
	}

	pub(crate) fn position(&self, locale: &str) -> Option<usize> {
		self.index.get(&comparison_key(locale.trim())).copied()
	}

	pub(crate) fn entry(&self, position: usize) -> Option<(&LocaleId, &PhraseCatalog)> {
		Some((self.locales.get(position)?, self.catalogs.get(position)?))
	}

	/// Pick the registered locale for an ordered preference list, falling
	/// back to the default locale. `None` means the pass-through catalog.
	pub fn negotiate<P: LocaleCandidate>(&self, preferred: &[P]) -> Option<usize> {
		if self.locales.is_empty() {
			return None;
		}
		let locale = resolve_locale(preferred, self.locales.as_slice(), self.default_locale.as_deref())?;
		self.position(&locale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{self, Write};
	use std::sync::{Arc, Mutex};
	use tracing::Level;
	use tracing_subscriber::fmt::MakeWriter;

	fn catalog(hi: &str) -> PhraseCatalog {
		PhraseCatalog::new().with("hi", hi)
	}

	fn sources() -> PhraseSources {
		PhraseSources::new()
			.with("it", catalog("Ciao"))
			.with("en", catalog("Hi"))
			.with("pt_BR", catalog("Olá"))
			.with("es", catalog("Hola"))
	}

	fn names(registry: &TranslationRegistry) -> Vec<&str> {
		registry.available().iter().map(LocaleId::as_str).collect()
	}

	#[test]
	fn test_registration_normalizes_and_keeps_order() {
		let registry = TranslationRegistry::from_sources(sources());
		assert_eq!(names(&registry), vec!["it", "en", "pt-BR", "es"]);
		assert_eq!(registry.available_joined(), "it,en,pt-BR,es");
	}

	#[test]
	fn test_catalog_lookup_is_case_and_separator_insensitive() {
		let registry = TranslationRegistry::from_sources(sources());
		assert_eq!(registry.catalog("pt_br").unwrap().lookup("hi"), "Olá");
		assert_eq!(registry.catalog("PT-BR").unwrap().lookup("hi"), "Olá");
		assert!(registry.catalog("de").is_none());
	}

	#[test]
	fn test_empty_registration_is_operational() {
		let registry = TranslationRegistry::from_sources(PhraseSources::new());
		assert!(registry.is_empty());
		assert_eq!(registry.negotiate(&["en"]), None);
	}

	#[derive(Clone, Default)]
	struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

	impl CapturedLogs {
		fn lines(&self) -> Vec<String> {
			String::from_utf8(self.0.lock().unwrap().clone())
				.unwrap()
				.lines()
				.map(str::to_string)
				.collect()
		}
	}

	impl Write for CapturedLogs {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().unwrap().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	impl<'a> MakeWriter<'a> for CapturedLogs {
		type Writer = CapturedLogs;

		fn make_writer(&'a self) -> Self::Writer {
			self.clone()
		}
	}

	fn warnings_during(f: impl FnOnce()) -> Vec<String> {
		let logs = CapturedLogs::default();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(logs.clone())
			.with_max_level(Level::WARN)
			.with_ansi(false)
			.finish();
		tracing::subscriber::with_default(subscriber, f);
		logs.lines()
	}

	#[test]
	fn test_empty_registration_warns_once() {
		let warnings = warnings_during(|| {
			TranslationRegistry::from_sources(PhraseSources::new());
		});
		let matching: Vec<_> = warnings
			.iter()
			.filter(|line| line.contains(NO_PHRASES_WARNING_CODE))
			.collect();
		assert_eq!(matching.len(), 1, "{warnings:?}");
		assert!(matching[0].contains("WARN"));
		assert!(matching[0].contains("No phrases registered; lookups will return keys"));
	}

	#[test]
	fn test_registration_with_phrases_does_not_warn() {
		let warnings = warnings_during(|| {
			TranslationRegistry::from_sources(sources());
		});
		assert!(
			!warnings.iter().any(|line| line.contains(NO_PHRASES_WARNING_CODE)),
			"{warnings:?}"
		);
	}

	#[test]
	fn test_first_registration_wins() {
		let mut registry = TranslationRegistry::from_sources(sources());
		assert!(!registry.register("en", catalog("Hello")));
		assert!(!registry.register("EN", catalog("Hello")));
		assert!(!registry.register("pt-BR", catalog("Oi")));
		assert_eq!(registry.len(), 4);
		assert_eq!(registry.catalog("en").unwrap().lookup("hi"), "Hi");
		assert_eq!(registry.catalog("pt-BR").unwrap().lookup("hi"), "Olá");
	}

	#[test]
	fn test_duplicate_in_one_mapping_keeps_first() {
		let mut registry = TranslationRegistry::new();
		let added = registry.register_all(
			PhraseSources::new()
				.with("pt_BR", catalog("Olá"))
				.with("pt-BR", catalog("Oi")),
		);
		assert_eq!(added, 1);
		assert_eq!(registry.catalog("pt-BR").unwrap().lookup("hi"), "Olá");
	}

	#[test]
	fn test_blank_locale_is_rejected() {
		let mut registry = TranslationRegistry::new();
		assert!(!registry.register("  ", catalog("Hi")));
		assert!(registry.is_empty());
	}

	#[test]
	fn test_extend_keeps_existing_entries() {
		let mut outer = TranslationRegistry::from_sources(
			PhraseSources::new().with("en", catalog("Hi")),
		)
		.with_default_locale(Some("en"));
		let inner = TranslationRegistry::from_sources(
			PhraseSources::new()
				.with("en", catalog("Hello"))
				.with("it", catalog("Ciao")),
		)
		.with_default_locale(Some("it"));

		outer.extend(inner);
		assert_eq!(names(&outer), vec!["en", "it"]);
		assert_eq!(outer.catalog("en").unwrap().lookup("hi"), "Hi");
		assert_eq!(outer.default_locale(), Some("en"));
	}

	#[test]
	fn test_blank_default_locale_is_none() {
		let registry = TranslationRegistry::new().with_default_locale(Some("  "));
		assert_eq!(registry.default_locale(), None);
		let registry = TranslationRegistry::new().with_default_locale(None::<String>);
		assert_eq!(registry.default_locale(), None);
	}

	#[test]
	fn test_negotiate() {
		let registry = TranslationRegistry::from_sources(sources()).with_default_locale(Some("en"));
		let locale = |preferred: &[&str]| {
			registry
				.negotiate(preferred)
				.and_then(|i| registry.entry(i))
				.map(|(locale, _)| locale.as_str().to_string())
		};

		assert_eq!(locale(&["en", "it", "pt-BR"]).as_deref(), Some("en"));
		assert_eq!(locale(&["pt"]).as_deref(), Some("pt-BR"));
		assert_eq!(locale(&["de-DE"]).as_deref(), Some("en"));
		assert_eq!(locale(&[]).as_deref(), Some("en"));
	}

	#[test]
	fn test_negotiate_without_default() {
		let registry = TranslationRegistry::from_sources(sources());
		assert_eq!(registry.negotiate(&["de-DE"]), None);
	}
}
