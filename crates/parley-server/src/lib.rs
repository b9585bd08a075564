// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Parley HTTP server.
//!
//! Serves a small set of translated endpoints. Every request goes through the
//! translation layer, which binds the catalog negotiated from the request's
//! `Accept-Language` header.

pub mod api;
pub mod catalogs;
pub mod routes;

pub use api::create_router;
pub use catalogs::{load_registry, registry_from_loader};
pub use parley_server_config::ServerConfig;
