//! # API Shared
//!
//! Shared definitions for the HealthAssist APIs.
//!
//! Contains:
//! - JSON wire types (`wire` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `healthassist-core`, `api-rest`, and the CLI so that every surface speaks the same
//! request/response shapes.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
