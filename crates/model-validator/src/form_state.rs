// File: src/form_state.rs
// Purpose: Detached snapshot of form values, errors and validity

use serde::{Deserialize, Serialize};

use model_validator_rules::{Model, Value};

use crate::Errors;

/// Owned copy of a validator's state at one point in time
///
/// Changing a snapshot has no effect on the validator it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    /// Field names to current values
    pub values: Model,
    /// Field names to error messages (empty string means no error)
    pub errors: Errors,
    pub is_valid: bool,
}

impl FormState {
    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.get_error(field).is_some()
    }

    /// Get the error message for a field, if it has one
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|message| !message.is_empty())
    }

    pub fn get_value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
