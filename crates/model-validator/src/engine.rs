// File: src/engine.rs
// Purpose: Form state owner; applies rules on validating mutations

use model_validator_rules::{Model, Value};
use tracing::debug;

use crate::form_state::FormState;
use crate::rules::Rules;
use crate::Errors;

const DEFAULT_NAME: &str = "form";

/// Tracks the values of a flat model and the error message of each field.
///
/// Mutations come in two flavours. Validating ones (`on_value_change`,
/// `on_values_change`) run the rules of the fields they touch and store the
/// fresh message, empty when the field passes. Silent ones
/// (`set_value_silent`, `set_values_silent`) only store values and leave
/// the error set alone until the next `validate`.
///
/// ```
/// use model_validator::{model, max_length_validator, require_validator, ModelValidator, Rules};
///
/// let rules = Rules::new()
///     .push("name", max_length_validator(5, "Invalid name"))
///     .push("name", require_validator("Name is require"));
/// let mut form = ModelValidator::new(model! { "name" => "", "code" => 1 }, rules);
///
/// assert!(form.is_valid());
/// assert!(!form.validate());
/// assert_eq!(form.error("name"), "Name is require");
///
/// form.on_value_change("name", "name");
/// assert!(form.is_valid());
/// ```
#[derive(Debug)]
pub struct ModelValidator {
    name: String,
    rules: Rules,
    values: Model,
    errors: Errors,
    is_valid: bool,
    initial_values: Model,
    initial_errors: Errors,
}

impl ModelValidator {
    pub fn new(defaults: Model, rules: Rules) -> Self {
        let errors = Errors::new();
        let mut validator = Self {
            name: DEFAULT_NAME.to_string(),
            rules,
            initial_values: defaults.clone(),
            initial_errors: errors.clone(),
            values: defaults,
            errors,
            is_valid: true,
        };
        validator.refresh_validity();
        validator
    }

    /// Label used for this form in log output
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &Model {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Error message of a field; empty when valid or not yet validated
    pub fn error(&self, field: &str) -> &str {
        self.errors.get(field).map(String::as_str).unwrap_or("")
    }

    /// True when no field currently holds an error message.
    ///
    /// Reflects the last validating operation only; call [`validate`](Self::validate)
    /// before treating the values as confirmed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snapshot(&self) -> FormState {
        FormState {
            values: self.values.clone(),
            errors: self.errors.clone(),
            is_valid: self.is_valid,
        }
    }

    /// Set one value and validate that field
    pub fn on_value_change(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        self.values.insert(field.clone(), value.into());

        let message = self.validate_field(&field);
        self.errors.insert(field.clone(), message);
        self.refresh_validity();

        debug!("[{}] '{}' changed (valid: {})", self.name, field, self.is_valid);
    }

    /// Set one value without validating it
    pub fn set_value_silent(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        debug!("[{}] '{}' set silently", self.name, field);
        self.values.insert(field, value.into());
    }

    /// Merge several values and validate exactly those fields.
    ///
    /// Error entries of fields outside `model` are kept as they are.
    pub fn on_values_change<I, K, V>(&mut self, model: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let changed = self.merge(model);

        let fresh: Vec<(String, String)> = changed
            .into_iter()
            .map(|field| {
                let message = self.validate_field(&field);
                (field, message)
            })
            .collect();
        debug!("[{}] {} field(s) changed", self.name, fresh.len());

        self.errors.extend(fresh);
        self.refresh_validity();
    }

    /// Merge several values without validating any of them
    pub fn set_values_silent<I, K, V>(&mut self, model: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let changed = self.merge(model);
        debug!("[{}] {} field(s) set silently", self.name, changed.len());
    }

    /// Merge values and clear every error back to the initial state.
    ///
    /// Used to re-baseline a form, e.g. after loading saved data. The
    /// snapshot restored by [`reset`](Self::reset) is not changed.
    pub fn set_initial_values<I, K, V>(&mut self, model: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.errors = self.initial_errors.clone();
        let changed = self.merge(model);
        self.refresh_validity();
        debug!("[{}] initial values set for {} field(s)", self.name, changed.len());
    }

    /// Validate every field of the model.
    ///
    /// Returns whether all fields pass right now, computed from this run
    /// rather than from the cached flag.
    pub fn validate(&mut self) -> bool {
        let fresh: Vec<(String, String)> = self
            .values
            .keys()
            .map(|field| (field.clone(), self.validate_field(field)))
            .collect();
        let valid = fresh.iter().all(|(_, message)| message.is_empty());

        self.errors.extend(fresh);
        self.refresh_validity();

        debug!("[{}] validated (valid: {})", self.name, valid);
        valid
    }

    /// Restore the values and errors captured at construction
    pub fn reset(&mut self) {
        self.values = self.initial_values.clone();
        self.errors = self.initial_errors.clone();
        self.refresh_validity();
        debug!("[{}] reset", self.name);
    }

    fn merge<I, K, V>(&mut self, model: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut changed = Vec::new();
        for (field, value) in model {
            let field = field.into();
            self.values.insert(field.clone(), value.into());
            if !changed.contains(&field) {
                changed.push(field);
            }
        }
        changed
    }

    fn validate_field(&self, field: &str) -> String {
        let value = self.values.get(field).unwrap_or(&Value::Null);
        self.rules.check(field, value, &self.values)
    }

    fn refresh_validity(&mut self) {
        self.is_valid = self.errors.values().all(String::is_empty);
    }
}
