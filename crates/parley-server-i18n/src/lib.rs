// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request translation for Parley HTTP servers.
//!
//! A [`TranslationRegistry`] is filled once at startup with one
//! [`PhraseCatalog`](parley_common_i18n::PhraseCatalog) per locale. The
//! [`translation_layer`] middleware then reads each request's
//! `Accept-Language` header, negotiates a locale against the registry and
//! binds the matching [`Translation`] to the request. Handlers read it with
//! the [`CurrentTranslation`] extractor.
//!
//! Resolution order for a request:
//!
//! 1. the best match for the `Accept-Language` tags, in header order
//! 2. the configured default locale, if it is registered
//! 3. the fallback catalog, which returns every key unchanged

mod accept_language;
mod middleware;
mod registry;
mod resolver;
mod translation;

pub use accept_language::{parse_accept_language, preferred_locales};
pub use middleware::{translation_layer, CurrentTranslation};
pub use registry::{TranslationRegistry, NO_PHRASES_WARNING_CODE};
pub use resolver::TranslationResolver;
pub use translation::Translation;
