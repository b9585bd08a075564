// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Startup loading of phrase catalogs.

use parley_common_i18n::{CatalogLoader, DirectoryLoader, LoaderError, PhraseSources, StaticLoader};
use parley_server_config::I18nConfig;
use parley_server_i18n::TranslationRegistry;
use tracing::{info, instrument};

/// Build the registry described by the `i18n` config section.
///
/// Without a phrases directory the registry starts empty, which is logged
/// as a warning but is not an error.
pub fn load_registry(config: &I18nConfig) -> Result<TranslationRegistry, LoaderError> {
	let loader: Box<dyn CatalogLoader> = match &config.phrases_dir {
		Some(dir) => Box::new(DirectoryLoader::new(dir)),
		None => Box::new(StaticLoader::new(PhraseSources::new())),
	};
	registry_from_loader(loader.as_ref(), config.default_locale.as_deref())
}

#[instrument(skip(loader), fields(loader = loader.name()))]
pub fn registry_from_loader(
	loader: &dyn CatalogLoader,
	default_locale: Option<&str>,
) -> Result<TranslationRegistry, LoaderError> {
	let sources = loader.load()?;
	let registry = TranslationRegistry::from_sources(sources).with_default_locale(default_locale);

	if let Some(locale) = registry.default_locale() {
		if registry.catalog(locale).is_none() {
			tracing::warn!(
				default_locale = locale,
				available = %registry.available_joined(),
				"Default locale has no catalog; unmatched requests will get keys back"
			);
		}
	}

	info!(
		locales = registry.len(),
		default_locale = registry.default_locale().unwrap_or("<none>"),
		"phrase catalogs ready"
	);
	Ok(registry)
}
