// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation middleware for Axum.
//!
//! ```ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(from_fn_with_state(resolver.clone(), translation_layer));
//!
//! async fn handler(translation: CurrentTranslation) -> String {
//!     translation.t("greeting.hi")
//! }
//! ```

use std::convert::Infallible;
use std::ops::Deref;

use axum::{
	body::Body,
	extract::{FromRequestParts, State},
	http::{request::Parts, Request},
	middleware::Next,
	response::Response,
};
use tracing::instrument;

use crate::resolver::TranslationResolver;
use crate::translation::Translation;

/// Binds a [`Translation`] to every request before it reaches a handler.
///
/// A request that already carries a `Translation` (because an outer layer
/// bound one) is re-negotiated over the outer layer's locales plus this
/// layer's. Locales the outer layer registered keep the outer catalog.
#[instrument(
	name = "translation_layer",
	skip(resolver, request, next),
	fields(locale = tracing::field::Empty)
)]
pub async fn translation_layer(
	State(resolver): State<TranslationResolver>,
	mut request: Request<Body>,
	next: Next,
) -> Response {
	let translation = match request.extensions().get::<Translation>() {
		Some(outer) => {
			tracing::trace!("translation already bound by an outer layer");
			resolver.resolve_nested(outer, request.headers())
		}
		None => resolver.resolve(request.headers()),
	};
	if let Some(locale) = translation.locale() {
		tracing::Span::current().record("locale", locale);
	}
	request.extensions_mut().insert(translation);
	next.run(request).await
}

/// The request's bound [`Translation`].
///
/// Never rejects: a request that went through no translation layer gets the
/// pass-through fallback.
#[derive(Debug, Clone)]
pub struct CurrentTranslation(pub Translation);

impl<S> FromRequestParts<S> for CurrentTranslation
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let translation = parts
			.extensions
			.get::<Translation>()
			.cloned()
			.unwrap_or_else(|| {
				tracing::debug!("no translation bound, using fallback");
				Translation::fallback()
			});
		Ok(CurrentTranslation(translation))
	}
}

impl Deref for CurrentTranslation {
	type Target = Translation;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::to_bytes,
		http::{header::ACCEPT_LANGUAGE, StatusCode},
		middleware::from_fn_with_state,
		routing::get,
		Router,
	};
	use parley_common_i18n::{PhraseCatalog, PhraseSources};
	use tower::ServiceExt;

	use crate::registry::TranslationRegistry;

	fn resolver(sources: PhraseSources, default_locale: Option<&str>) -> TranslationResolver {
		TranslationResolver::new(
			TranslationRegistry::from_sources(sources).with_default_locale(default_locale),
		)
	}

	fn english() -> PhraseSources {
		PhraseSources::new().with("en", PhraseCatalog::new().with("hi", "Hi"))
	}

	fn italian() -> PhraseSources {
		PhraseSources::new().with("it", PhraseCatalog::new().with("hi", "Ciao"))
	}

	async fn greet(translation: CurrentTranslation) -> String {
		format!("{}:{}", translation.locale().unwrap_or("-"), translation.t("hi"))
	}

	async fn body_text(app: Router, accept_language: Option<&str>) -> String {
		let mut request = Request::builder().uri("/");
		if let Some(value) = accept_language {
			request = request.header(ACCEPT_LANGUAGE, value);
		}
		let response = app
			.oneshot(request.body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
		let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		String::from_utf8(bytes.to_vec()).unwrap()
	}

	#[tokio::test]
	async fn test_layer_binds_negotiated_translation() {
		let app = Router::new()
			.route("/", get(greet))
			.layer(from_fn_with_state(resolver(english(), None), translation_layer));
		assert_eq!(body_text(app, Some("en-US")).await, "en:Hi");
	}

	#[tokio::test]
	async fn test_extractor_without_layer_uses_fallback() {
		let app = Router::new().route("/", get(greet));
		assert_eq!(body_text(app, Some("en")).await, "-:hi");
	}

	#[tokio::test]
	async fn test_inner_layer_adds_locales_to_outer_fallback() {
		let app = Router::new()
			.route("/", get(greet))
			.layer(from_fn_with_state(resolver(italian(), Some("it")), translation_layer))
			.layer(from_fn_with_state(resolver(english(), None), translation_layer));
		assert_eq!(body_text(app, Some("it")).await, "it:Ciao");
	}

	#[tokio::test]
	async fn test_nested_layers_negotiate_over_both_registrations() {
		let app = Router::new()
			.route("/", get(greet))
			.layer(from_fn_with_state(resolver(italian(), None), translation_layer))
			.layer(from_fn_with_state(resolver(english(), Some("en")), translation_layer));
		assert_eq!(body_text(app.clone(), Some("it")).await, "it:Ciao");
		assert_eq!(body_text(app.clone(), Some("en")).await, "en:Hi");
		assert_eq!(body_text(app, Some("de")).await, "en:Hi");
	}

	#[tokio::test]
	async fn test_outer_catalog_wins_for_same_locale() {
		let inner = PhraseSources::new()
			.with("EN", PhraseCatalog::new().with("hi", "Hello"))
			.with("it", PhraseCatalog::new().with("hi", "Ciao"));
		let app = Router::new()
			.route("/", get(greet))
			.layer(from_fn_with_state(resolver(inner, None), translation_layer))
			.layer(from_fn_with_state(resolver(english(), None), translation_layer));
		assert_eq!(body_text(app.clone(), Some("en")).await, "en:Hi");
		assert_eq!(body_text(app, Some("it")).await, "it:Ciao");
	}

	#[tokio::test]
	async fn test_requests_are_independent() {
		let sources = english().with("it", PhraseCatalog::new().with("hi", "Ciao"));
		let app = Router::new()
			.route("/", get(greet))
			.layer(from_fn_with_state(resolver(sources, None), translation_layer));

		assert_eq!(body_text(app.clone(), Some("it")).await, "it:Ciao");
		assert_eq!(body_text(app.clone(), Some("en")).await, "en:Hi");
		assert_eq!(body_text(app, Some("de")).await, "-:hi");
	}
}
