// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Nested phrase catalogs and dotted-key lookup.

use std::collections::BTreeMap;

/// Separator between path segments of a phrase key.
pub const KEY_SEPARATOR: char = '.';

static FALLBACK: PhraseCatalog = PhraseCatalog {
	entries: BTreeMap::new(),
};

/// A node of a phrase tree: either a translated phrase or a named group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseNode {
	Phrase(String),
	Group(BTreeMap<String, PhraseNode>),
}

impl From<&str> for PhraseNode {
	fn from(phrase: &str) -> Self {
		PhraseNode::Phrase(phrase.to_string())
	}
}

impl From<String> for PhraseNode {
	fn from(phrase: String) -> Self {
		PhraseNode::Phrase(phrase)
	}
}

impl From<PhraseCatalog> for PhraseNode {
	fn from(catalog: PhraseCatalog) -> Self {
		PhraseNode::Group(catalog.entries)
	}
}

/// Phrases for a single locale.
///
/// Leaves are strings, inner nodes are named groups of any depth. Lookups
/// that do not end on a phrase return the key unchanged, so an empty catalog
/// behaves as a pass-through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseCatalog {
	entries: BTreeMap<String, PhraseNode>,
}

impl PhraseCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// The shared zero-entry catalog used when no locale could be resolved.
	pub fn fallback() -> &'static PhraseCatalog {
		&FALLBACK
	}

	/// Add a phrase or group at the top level, replacing any previous entry.
	pub fn with(mut self, key: impl Into<String>, node: impl Into<PhraseNode>) -> Self {
		self.entries.insert(key.into(), node.into());
		self
	}

	/// Build a catalog from a JSON object.
	///
	/// Strings become phrases and objects become groups. Other values
	/// (numbers, arrays, null) are skipped, as is anything that is not an
	/// object at the root.
	pub fn from_json(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Object(map) => Self {
				entries: json_entries(map),
			},
			other => {
				tracing::debug!(kind = json_kind(other), "phrase source root is not an object");
				Self::default()
			}
		}
	}

	/// Build a catalog from a TOML table. Same rules as [`Self::from_json`].
	pub fn from_toml(table: &toml::Table) -> Self {
		Self {
			entries: toml_entries(table),
		}
	}

	/// Resolve a dotted key to its phrase, if the full path ends on one.
	pub fn get(&self, key: &str) -> Option<&str> {
		let mut segments = key.split(KEY_SEPARATOR);
		let mut node = self.entries.get(segments.next()?)?;
		for segment in segments {
			node = match node {
				PhraseNode::Group(children) => children.get(segment)?,
				PhraseNode::Phrase(_) => return None,
			};
		}
		match node {
			PhraseNode::Phrase(phrase) => Some(phrase),
			PhraseNode::Group(_) => None,
		}
	}

	/// Resolve a dotted key, falling back to the key itself.
	pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
		self.get(key).unwrap_or(key)
	}

	/// Owned variant of [`Self::lookup`].
	///
	/// ```
	/// use parley_common_i18n::PhraseCatalog;
	///
	/// let catalog = PhraseCatalog::new().with("hi", "Ciao");
	/// assert_eq!(catalog.t("hi"), "Ciao");
	/// assert_eq!(catalog.t("bye"), "bye");
	/// ```
	pub fn t(&self, key: &str) -> String {
		self.lookup(key).to_string()
	}

	/// Translate and substitute `%{name}` placeholders.
	///
	/// ```
	/// use parley_common_i18n::PhraseCatalog;
	///
	/// let catalog = PhraseCatalog::new().with("welcome", "Hi %{name}");
	/// assert_eq!(catalog.t_fmt("welcome", &[("name", "Ana")]), "Hi Ana");
	/// ```
	pub fn t_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		interpolate(self.lookup(key), args)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of top-level entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of phrases across all nesting levels.
	pub fn phrase_count(&self) -> usize {
		fn count(nodes: &BTreeMap<String, PhraseNode>) -> usize {
			nodes
				.values()
				.map(|node| match node {
					PhraseNode::Phrase(_) => 1,
					PhraseNode::Group(children) => count(children),
				})
				.sum()
		}
		count(&self.entries)
	}
}

impl From<BTreeMap<String, PhraseNode>> for PhraseCatalog {
	fn from(entries: BTreeMap<String, PhraseNode>) -> Self {
		Self { entries }
	}
}

impl<K: Into<String>, V: Into<PhraseNode>> FromIterator<(K, V)> for PhraseCatalog {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, node)| (key.into(), node.into()))
				.collect(),
		}
	}
}

/// Replace `%{name}` placeholders in `phrase`. Unknown placeholders stay as they are.
pub fn interpolate(phrase: &str, args: &[(&str, &str)]) -> String {
	let mut result = phrase.to_string();
	for (name, value) in args {
		let placeholder = format!("%{{{name}}}");
		result = result.replace(&placeholder, value);
	}
	result
}

fn json_entries(map: &serde_json::Map<String, serde_json::Value>) -> BTreeMap<String, PhraseNode> {
	let mut entries = BTreeMap::new();
	for (key, value) in map {
		match value {
			serde_json::Value::String(phrase) => {
				entries.insert(key.clone(), PhraseNode::Phrase(phrase.clone()));
			}
			serde_json::Value::Object(children) => {
				entries.insert(key.clone(), PhraseNode::Group(json_entries(children)));
			}
			other => {
				tracing::debug!(key = %key, kind = json_kind(other), "skipping non-phrase value");
			}
		}
	}
	entries
}

fn toml_entries(table: &toml::Table) -> BTreeMap<String, PhraseNode> {
	let mut entries = BTreeMap::new();
	for (key, value) in table {
		match value {
			toml::Value::String(phrase) => {
				entries.insert(key.clone(), PhraseNode::Phrase(phrase.clone()));
			}
			toml::Value::Table(children) => {
				entries.insert(key.clone(), PhraseNode::Group(toml_entries(children)));
			}
			other => {
				tracing::debug!(key = %key, kind = other.type_str(), "skipping non-phrase value");
			}
		}
	}
	entries
}

fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "bool",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
