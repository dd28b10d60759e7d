//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validator::FieldValidator;
use crate::value::{Model, Value};

// local-part@domain; the domain is a bracketed IPv4 literal or dotted
// labels ending in an alphabetic label of at least two characters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

/// Validates email format
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailValidator {
    message: String,
}

impl FieldValidator for EmailValidator {
    fn check(&self, value: &Value, _values: &Model) -> Result<(), String> {
        match value.as_str() {
            Some(email) if is_valid_email(email) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }
}

/// Fails unless the value is non-empty text shaped like an email address
pub fn email_validator(message: impl Into<String>) -> EmailValidator {
    EmailValidator {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("test@gmail.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("\"john doe\"@example.com"));
        assert!(is_valid_email("user@[192.168.0.1]"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@23.45"));
        assert!(!is_valid_email("user..name@example.com"));
    }

    #[test]
    fn test_non_text_values_fail() {
        let rule = email_validator("Invalid email");
        assert!(rule.check_value(&Value::Null).is_err());
        assert!(rule.check_value(&Value::from(5)).is_err());
        assert!(rule.check_value(&Value::from(true)).is_err());
    }
}
