//! # HealthAssist Core
//!
//! Business logic for the HealthAssist community health portal.
//!
//! This crate contains the pure engines and the services that own mutable state:
//! - Symptom checking: a static condition catalog, the [`matcher`] and the [`ranker`]
//! - Keyword responders for the chatbot and health-information questions
//! - Clinic queue claims with random tickets
//! - Family accounts and the family dashboard, held in injected in-memory repositories
//!
//! **No API concerns**: HTTP routing, status codes and OpenAPI documents belong in `api-rest`.
//! Inputs and outputs are the wire types from `api-shared`.

pub mod accounts;
pub mod catalog;
pub mod clinics;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod matcher;
pub mod queue;
pub mod ranker;
pub mod repositories;
pub mod responder;
pub mod topics;
pub mod validation;

pub use accounts::AccountService;
pub use config::CoreConfig;
pub use dashboard::DashboardService;
pub use error::{PortalError, PortalResult};
pub use queue::ClaimService;

pub use api_shared::wire;
pub use healthassist_types::{EmailAddress, NonEmptyText};
