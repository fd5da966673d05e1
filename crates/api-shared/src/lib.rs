//! # API Shared
//!
//! Wire types and shared services for the vet clinic APIs.
//!
//! Contains:
//! - JSON request/response types with OpenAPI schemas (`wire` module)
//! - `HealthService`
//!
//! Used by `api-rest` and the CLI.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
