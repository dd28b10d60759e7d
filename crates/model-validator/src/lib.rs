//! # Model Validator
//!
//! Form state and validation for flat models: current values, a per-field
//! error message derived from ordered validator lists, and a validity flag.
//!
//! ## Example
//!
//! ```rust
//! use model_validator::{model, max_length_validator, require_validator, ModelValidator, Rules};
//!
//! let rules = Rules::new()
//!     .push("name", max_length_validator(5, "Invalid name"))
//!     .push("name", require_validator("Name is require"))
//!     .push("code", max_length_validator(10, "Invalid code"));
//!
//! let mut form = ModelValidator::new(
//!     model! { "name" => "", "code" => 1, "isActive" => false },
//!     rules,
//! );
//!
//! // prefill without showing errors
//! form.set_value_silent("name", "a very long invalid value");
//! assert!(form.is_valid());
//!
//! // submission check
//! if !form.validate() {
//!     assert_eq!(form.error("name"), "Invalid name");
//! }
//! ```

use std::collections::BTreeMap;

pub mod config;
pub mod engine;
pub mod error;
pub mod form_state;
pub mod rules;

/// Field names to error messages; an empty message means no error
pub type Errors = BTreeMap<String, String>;

pub use config::{parse_model_json, FormConfig};
pub use engine::ModelValidator;
pub use error::FormError;
pub use form_state::FormState;
pub use rules::Rules;

// Re-export the validator library
pub use model_validator_rules::{
    email_validator, equals_field_validator, is_valid_email, max_length_validator,
    min_length_validator, model, regexp_validator, require_validator, require_validator_with,
    EmailValidator, EqualsFieldValidator, FieldValidator, MaxLengthValidator, MinLengthValidator,
    Model, RegExpValidator, Regex, RequireValidator, Value,
};
