//! Gmail registration probe.
//!
//! Infers whether an address is registered by asking the provider's gxlu
//! endpoint and watching for a `Set-Cookie` response header.

mod client;
mod error;
mod types;

pub use client::{GxluClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::ProbeError;
pub use types::*;
