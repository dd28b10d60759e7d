// File: src/validator.rs
// Purpose: The single-operation validator capability

use crate::value::{Model, Value};

/// A rule attached to one field
///
/// `check` receives the candidate value and the full current model, so a
/// rule can compare against sibling fields. Returns `Err(message)` when the
/// candidate fails. Implementations must be pure and must not panic.
///
/// Any `Fn(&Value, &Model) -> Result<(), String>` is a validator:
///
/// ```
/// use model_validator_rules::{FieldValidator, Model, Value};
///
/// let positive = |value: &Value, _: &Model| match value.as_number() {
///     Some(n) if n > 0.0 => Ok(()),
///     _ => Err("Must be positive".to_string()),
/// };
/// assert!(positive.check_value(&Value::from(3)).is_ok());
/// ```
pub trait FieldValidator: Send + Sync {
    fn check(&self, value: &Value, values: &Model) -> Result<(), String>;

    /// Checks a value without any sibling fields
    fn check_value(&self, value: &Value) -> Result<(), String> {
        self.check(value, &Model::new())
    }

    fn boxed(self) -> Box<dyn FieldValidator>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<F> FieldValidator for F
where
    F: Fn(&Value, &Model) -> Result<(), String> + Send + Sync,
{
    fn check(&self, value: &Value, values: &Model) -> Result<(), String> {
        self(value, values)
    }
}
