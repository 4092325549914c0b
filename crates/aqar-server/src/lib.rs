// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Aqar listings server.
//!
//! HTTP backend for a bilingual (Arabic/English) real-estate site: public
//! inventory search with locale-aware responses, a developer/project
//! catalog, lead capture, and token-authenticated staff management.

pub mod api;
pub mod api_docs;
pub mod auth_middleware;
pub mod error;
pub mod locale;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use aqar_server_config::ServerConfig;
pub use auth_middleware::StaffAuth;
pub use error::ServerError;
pub use locale::RequestLocale;
