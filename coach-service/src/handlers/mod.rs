//! HTTP handlers for the coach service.

pub mod coach;
pub mod health;
pub mod metrics;

pub use coach::{coach, method_not_allowed, not_found};
pub use health::{health_check, readiness_check};
