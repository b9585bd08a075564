// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Router construction.

use axum::{middleware::from_fn_with_state, routing::get, Router};
use parley_server_i18n::{translation_layer, TranslationResolver};

use crate::routes;

/// Build the application router with the translation layer applied to
/// every route.
pub fn create_router(resolver: TranslationResolver) -> Router {
	Router::new()
		.route("/", get(routes::greeting::home))
		.route("/404", get(routes::greeting::not_found))
		.route("/health", get(routes::health::health_check))
		.layer(from_fn_with_state(resolver, translation_layer))
}
