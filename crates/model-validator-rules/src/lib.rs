//! Model Validator Rules
//!
//! Pure validator values for flat form models. Each factory takes its
//! configuration and an error message and returns a [`FieldValidator`]
//! that maps a candidate [`Value`] (plus the current [`Model`]) to
//! `Ok(())` or the configured message.
//!
//! ```
//! use model_validator_rules::{max_length_validator, FieldValidator, Value};
//!
//! let rule = max_length_validator(5, "Invalid name");
//! assert!(rule.check_value(&Value::from("val")).is_ok());
//! assert_eq!(rule.check_value(&Value::from("value long")), Err("Invalid name".to_string()));
//! ```

pub mod email;
pub mod macros;
pub mod string;
pub mod validator;
pub mod value;

pub use email::*;
pub use regex::Regex;
pub use string::*;
pub use validator::FieldValidator;
pub use value::{Model, Value};
