// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation and phrase catalogs for Parley.
//!
//! This crate holds the pieces of request translation that do not depend on
//! an HTTP framework:
//!
//! - [`find_best_locale`]: match an ordered client preference list against
//!   the registered locales (exact match first, then prefix match, per
//!   preference, case-insensitive)
//! - [`PhraseCatalog`]: a nested phrase tree with dotted-key lookup that
//!   returns the key itself when nothing is found
//! - [`CatalogLoader`]: pluggable sources of per-locale catalogs, including
//!   [`DirectoryLoader`] for `*.json` / `*.toml` files
//!
//! # Key Naming Convention
//!
//! Phrase keys are hierarchical and separated by dots, mirroring the nesting
//! of the catalog source:
//!
//! ```text
//! { "greeting": { "hi": "Hi" } }   →   "greeting.hi"
//! ```
//!
//! # Example
//!
//! ```
//! use parley_common_i18n::{find_best_locale, PhraseCatalog};
//!
//! let locale = find_best_locale(&["pt", "en"], &["en", "pt-BR"]);
//! assert_eq!(locale.as_deref(), Some("pt-BR"));
//!
//! let catalog = PhraseCatalog::from_json(&serde_json::json!({
//!     "greeting": { "hi": "Olá" }
//! }));
//! assert_eq!(catalog.t("greeting.hi"), "Olá");
//! assert_eq!(catalog.t("greeting.bye"), "greeting.bye");
//! ```

mod catalog;
mod error;
mod loader;
mod locale;
mod matcher;
mod resolve;

pub use catalog::{interpolate, PhraseCatalog, PhraseNode, KEY_SEPARATOR};
pub use error::LoaderError;
pub use loader::{load_catalog_file, CatalogLoader, DirectoryLoader, PhraseSources, StaticLoader};
pub use locale::{comparison_key, normalize_locale, LocaleId};
pub use matcher::{find_best_locale, find_best_locale_json, LocaleCandidate};
pub use resolve::resolve_locale;
