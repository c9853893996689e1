//! Route handlers, grouped by portal feature.

pub mod auth;
pub mod clinic_queue;
pub mod dashboard;
pub mod health_info;
pub mod service;
pub mod symptoms;
