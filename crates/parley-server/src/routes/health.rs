// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::Json;
use parley_server_i18n::CurrentTranslation;
use serde_json::{json, Value};

/// GET /health - liveness plus the registered locales, split into their
/// language and region subtags.
pub async fn health_check(translation: CurrentTranslation) -> Json<Value> {
	let locales: Vec<Value> = translation
		.available()
		.iter()
		.map(|locale| {
			json!({
				"tag": locale.as_str(),
				"language": locale.language(),
				"region": locale.region(),
			})
		})
		.collect();
	Json(json!({
		"status": "ok",
		"locales": locales,
	}))
}
