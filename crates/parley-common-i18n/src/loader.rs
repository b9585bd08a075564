// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog sources.
//!
//! A [`CatalogLoader`] produces the `locale → catalog` mapping that gets
//! registered at startup. Loaders run once, before serving; nothing here is
//! touched per request.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::catalog::PhraseCatalog;
use crate::error::LoaderError;

/// Ordered `locale → catalog` pairs, in the order they were produced.
///
/// Locale identifiers are kept as given; normalization happens at
/// registration.
#[derive(Debug, Clone, Default)]
pub struct PhraseSources {
	entries: Vec<(String, PhraseCatalog)>,
}

impl PhraseSources {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, locale: impl Into<String>, catalog: PhraseCatalog) {
		self.entries.push((locale.into(), catalog));
	}

	pub fn with(mut self, locale: impl Into<String>, catalog: PhraseCatalog) -> Self {
		self.insert(locale, catalog);
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn locales(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(locale, _)| locale.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &PhraseCatalog)> {
		self
			.entries
			.iter()
			.map(|(locale, catalog)| (locale.as_str(), catalog))
	}
}

impl IntoIterator for PhraseSources {
	type Item = (String, PhraseCatalog);
	type IntoIter = std::vec::IntoIter<(String, PhraseCatalog)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<K: Into<String>> FromIterator<(K, PhraseCatalog)> for PhraseSources {
	fn from_iter<I: IntoIterator<Item = (K, PhraseCatalog)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(locale, catalog)| (locale.into(), catalog))
				.collect(),
		}
	}
}

/// Trait for catalog sources.
pub trait CatalogLoader: Send + Sync {
	fn name(&self) -> &'static str;
	fn load(&self) -> Result<PhraseSources, LoaderError>;
}

/// Catalogs built in code.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
	sources: PhraseSources,
}

impl StaticLoader {
	pub fn new(sources: PhraseSources) -> Self {
		Self { sources }
	}
}

impl CatalogLoader for StaticLoader {
	fn name(&self) -> &'static str {
		"static"
	}

	fn load(&self) -> Result<PhraseSources, LoaderError> {
		Ok(self.sources.clone())
	}
}

/// Loads one catalog per `*.json` / `*.toml` file in a directory.
///
/// The file stem is the locale identifier (`pt_BR.json` → `pt_BR`). Files
/// are read in name order. A file that cannot be read or parsed is logged
/// and skipped; an unreadable directory is an error.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
	path: PathBuf,
}

impl DirectoryLoader {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl CatalogLoader for DirectoryLoader {
	fn name(&self) -> &'static str {
		"directory"
	}

	#[tracing::instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
	fn load(&self) -> Result<PhraseSources, LoaderError> {
		let entries = std::fs::read_dir(&self.path).map_err(|e| LoaderError::DirectoryRead {
			path: self.path.clone(),
			source: e,
		})?;

		let mut files: Vec<PathBuf> = entries
			.filter_map(|entry| entry.ok())
			.map(|entry| entry.path())
			.filter(|path| path.is_file() && catalog_format(path).is_some())
			.collect();
		files.sort();

		let mut sources = PhraseSources::new();
		for file in files {
			let Some(locale) = file.file_stem().and_then(|stem| stem.to_str()) else {
				continue;
			};
			match load_catalog_file(&file) {
				Ok(catalog) => {
					debug!(locale, phrases = catalog.phrase_count(), "loaded phrase file");
					sources.insert(locale, catalog);
				}
				Err(e) => {
					warn!(path = %file.display(), error = %e, "Failed to load phrase file, skipping");
				}
			}
		}

		Ok(sources)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
	Json,
	Toml,
}

fn catalog_format(path: &Path) -> Option<CatalogFormat> {
	match path.extension().and_then(|ext| ext.to_str()) {
		Some("json") => Some(CatalogFormat::Json),
		Some("toml") => Some(CatalogFormat::Toml),
		_ => None,
	}
}

/// Read a single `*.json` or `*.toml` phrase file.
pub fn load_catalog_file(path: &Path) -> Result<PhraseCatalog, LoaderError> {
	let format =
		catalog_format(path).ok_or_else(|| LoaderError::UnsupportedFormat(path.to_path_buf()))?;

	let content = std::fs::read_to_string(path).map_err(|e| LoaderError::FileRead {
		path: path.to_path_buf(),
		source: e,
	})?;

	match format {
		CatalogFormat::Json => {
			let value: serde_json::Value =
				serde_json::from_str(&content).map_err(|e| LoaderError::JsonParse {
					path: path.to_path_buf(),
					source: e,
				})?;
			Ok(PhraseCatalog::from_json(&value))
		}
		CatalogFormat::Toml => {
			let table: toml::Table = toml::from_str(&content).map_err(|e| LoaderError::TomlParse {
				path: path.to_path_buf(),
				source: e,
			})?;
			Ok(PhraseCatalog::from_toml(&table))
		}
	}
}
