//! # API REST
//!
//! REST API implementation for HealthAssist.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS, request tracing)
//!
//! Business rules live in `healthassist-core`; request and response shapes come from
//! `api-shared`.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{router, ApiDoc};
pub use state::AppState;
