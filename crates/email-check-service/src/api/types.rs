//! API request and response types.

use serde::{Deserialize, Serialize};

pub use gxlu_client::CheckResult;

/// Request to check a Gmail username.
#[derive(Debug, Deserialize)]
pub struct CheckEmailRequest {
    /// Local part of the address to probe. The wire name is `domain`
    /// for compatibility with existing callers.
    pub domain: String,
}

impl CheckEmailRequest {
    pub fn local_part(&self) -> &str {
        &self.domain
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Validate a local part before it is probed.
///
/// Only rejects input that cannot name a mailbox at all; address grammar
/// is left to the provider.
pub fn validate_local_part(local_part: &str) -> Result<&str, String> {
    if local_part.trim().is_empty() {
        return Err("domain must not be empty".to_string());
    }

    if local_part.contains('@') {
        return Err(format!(
            "domain must be a username without '@', got {:?}",
            local_part
        ));
    }

    Ok(local_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_local_part() {
        assert_eq!(validate_local_part("testuser123"), Ok("testuser123"));
        assert_eq!(validate_local_part("well.known.user"), Ok("well.known.user"));

        assert!(validate_local_part("").is_err());
        assert!(validate_local_part("   ").is_err());
        assert!(validate_local_part("someone@gmail.com").is_err());
    }

    #[test]
    fn test_request_wire_name() {
        let request: CheckEmailRequest =
            serde_json::from_str(r#"{"domain": "testuser123"}"#).unwrap();
        assert_eq!(request.local_part(), "testuser123");

        assert!(serde_json::from_str::<CheckEmailRequest>(r#"{"local_part": "x"}"#).is_err());
    }
}
