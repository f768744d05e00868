//! Probe errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// The outbound call could not be completed: connect, DNS, TLS,
    /// timeout or a response that could not be parsed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Local part must not be empty")]
    EmptyLocalPart,
}

impl ProbeError {
    /// Whether the failure happened before any request left the process.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, ProbeError::EmptyLocalPart)
    }
}
