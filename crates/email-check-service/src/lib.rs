//! Email Check Service - reports whether a Gmail username is taken.
//!
//! Wraps the gxlu registration probe in a small HTTP API:
//! - `POST /check-email` probes one username
//! - `GET /health` reports liveness

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;

pub use config::Config;
pub use error::ServiceError;
