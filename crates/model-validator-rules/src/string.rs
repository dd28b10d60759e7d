//! Presence, length, pattern and cross-field validators

use regex::Regex;

use crate::validator::FieldValidator;
use crate::value::{Model, Value};

/// Size a length bound compares against: a number's own value, otherwise
/// the character length of the candidate treated as text.
///
/// Falsy values measure as empty text. `true` has no length, so length
/// bounds never reject it.
fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) => Some(s.chars().count() as f64),
        Value::Null | Value::Bool(false) => Some(0.0),
        Value::Bool(true) => None,
    }
}

fn fail(message: &str) -> Result<(), String> {
    Err(message.to_string())
}

/// Fails on `Null` and empty text, and on zero when `allow_zero` is off
#[derive(Debug, Clone, PartialEq)]
pub struct RequireValidator {
    message: String,
    allow_zero: bool,
}

impl FieldValidator for RequireValidator {
    fn check(&self, value: &Value, _values: &Model) -> Result<(), String> {
        let missing = match value {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            Value::Number(n) => !self.allow_zero && *n == 0.0,
            Value::Bool(_) => false,
        };
        if missing {
            fail(&self.message)
        } else {
            Ok(())
        }
    }
}

/// Required field; zero counts as a value
pub fn require_validator(message: impl Into<String>) -> RequireValidator {
    require_validator_with(message, true)
}

pub fn require_validator_with(message: impl Into<String>, allow_zero: bool) -> RequireValidator {
    RequireValidator {
        message: message.into(),
        allow_zero,
    }
}

/// Upper bound on a number, or on the character length of anything else
#[derive(Debug, Clone, PartialEq)]
pub struct MaxLengthValidator {
    max: f64,
    message: String,
}

impl FieldValidator for MaxLengthValidator {
    fn check(&self, value: &Value, _values: &Model) -> Result<(), String> {
        if measure(value).is_some_and(|size| size > self.max) {
            fail(&self.message)
        } else {
            Ok(())
        }
    }
}

pub fn max_length_validator(max: impl Into<f64>, message: impl Into<String>) -> MaxLengthValidator {
    MaxLengthValidator {
        max: max.into(),
        message: message.into(),
    }
}

/// Lower bound on a number, or on the character length of anything else
#[derive(Debug, Clone, PartialEq)]
pub struct MinLengthValidator {
    min: f64,
    message: String,
}

impl FieldValidator for MinLengthValidator {
    fn check(&self, value: &Value, _values: &Model) -> Result<(), String> {
        if measure(value).is_some_and(|size| size < self.min) {
            fail(&self.message)
        } else {
            Ok(())
        }
    }
}

pub fn min_length_validator(min: impl Into<f64>, message: impl Into<String>) -> MinLengthValidator {
    MinLengthValidator {
        min: min.into(),
        message: message.into(),
    }
}

/// Passes when the value's text form contains at least one match
#[derive(Debug, Clone)]
pub struct RegExpValidator {
    pattern: Regex,
    message: String,
}

impl FieldValidator for RegExpValidator {
    fn check(&self, value: &Value, _values: &Model) -> Result<(), String> {
        if self.pattern.is_match(&value.to_string()) {
            Ok(())
        } else {
            fail(&self.message)
        }
    }
}

pub fn regexp_validator(pattern: Regex, message: impl Into<String>) -> RegExpValidator {
    RegExpValidator {
        pattern,
        message: message.into(),
    }
}

/// Passes when the value equals another field of the current model,
/// e.g. a password confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct EqualsFieldValidator {
    other: String,
    message: String,
}

impl FieldValidator for EqualsFieldValidator {
    fn check(&self, value: &Value, values: &Model) -> Result<(), String> {
        let other = values.get(&self.other).unwrap_or(&Value::Null);
        if value == other {
            Ok(())
        } else {
            fail(&self.message)
        }
    }
}

pub fn equals_field_validator(
    other_field: impl Into<String>,
    message: impl Into<String>,
) -> EqualsFieldValidator {
    EqualsFieldValidator {
        other: other_field.into(),
        message: message.into(),
    }
}
