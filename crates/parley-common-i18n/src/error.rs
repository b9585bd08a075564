// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog loading errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
	#[error("Failed to read phrase directory {path}: {source}")]
	DirectoryRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read phrase file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse JSON phrases at {path}: {source}")]
	JsonParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to parse TOML phrases at {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Unsupported phrase file format: {0}")]
	UnsupportedFormat(PathBuf),
}
