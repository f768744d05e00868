//! Probe result types.

use serde::Serialize;

/// Domain appended to every local part.
pub const GMAIL_DOMAIN: &str = "gmail.com";

/// Build the full address probed for a local part.
pub fn email_for(local_part: &str) -> String {
    format!("{}@{}", local_part, GMAIL_DOMAIN)
}

/// Outcome of a single registration probe.
///
/// `is_available` is always the negation of `is_registered`; the only
/// constructor enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub email: String,
    pub is_available: bool,
    pub is_registered: bool,
}

impl CheckResult {
    pub fn new(email: impl Into<String>, is_registered: bool) -> Self {
        Self {
            email: email.into(),
            is_available: !is_registered,
            is_registered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_for_appends_gmail_domain() {
        assert_eq!(email_for("testuser123"), "testuser123@gmail.com");
        assert_eq!(email_for("well.known.user"), "well.known.user@gmail.com");
    }

    #[test]
    fn test_email_for_keeps_local_part_verbatim() {
        assert_eq!(email_for("First.Last+tag"), "First.Last+tag@gmail.com");
    }

    #[test]
    fn test_email_for_varied_local_parts() {
        let long = "a".repeat(512);
        let inputs = [
            "x",
            "josé.ñandú",
            "用户",
            "name+tag",
            "100%real",
            "with space",
            " padded ",
            "a&b=c?d#e",
            long.as_str(),
        ];

        for local_part in inputs {
            let email = email_for(local_part);
            assert_eq!(email, format!("{}@gmail.com", local_part));
            assert!(email.starts_with(local_part));
            assert!(email.ends_with("@gmail.com"));
        }
    }

    #[test]
    fn test_flags_are_negations() {
        let registered = CheckResult::new("a@gmail.com", true);
        assert!(registered.is_registered);
        assert!(!registered.is_available);

        let available = CheckResult::new("b@gmail.com", false);
        assert!(!available.is_registered);
        assert!(available.is_available);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(CheckResult::new("testuser123@gmail.com", false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "testuser123@gmail.com",
                "is_available": true,
                "is_registered": false
            })
        );
    }
}
