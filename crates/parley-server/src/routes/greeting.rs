// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translated demo endpoints.

use axum::{
	http::{header::CONTENT_LANGUAGE, HeaderValue, StatusCode},
	response::{IntoResponse, Response},
	Json,
};
use parley_server_i18n::{CurrentTranslation, Translation};
use serde_json::{json, Value};

/// GET / - greeting in the negotiated language.
pub async fn home(translation: CurrentTranslation) -> Response {
	let body = json!({
		"greeting": {
			"hi": translation.t("greeting.hi"),
		},
		"other": translation.t("other"),
	});
	translated(&translation, StatusCode::OK, body)
}

/// GET /404 - translated not-found message.
pub async fn not_found(translation: CurrentTranslation) -> Response {
	let body = json!({
		"404": {
			"not_found": translation.t("404.not_found"),
		},
	});
	translated(&translation, StatusCode::NOT_FOUND, body)
}

/// JSON response carrying `Content-Language` when a locale was bound.
fn translated(translation: &Translation, status: StatusCode, body: Value) -> Response {
	let mut response = (status, Json(body)).into_response();
	if let Some(value) = translation
		.locale()
		.and_then(|locale| HeaderValue::from_str(locale).ok())
	{
		response.headers_mut().insert(CONTENT_LANGUAGE, value);
	}
	response
}
