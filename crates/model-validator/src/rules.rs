// File: src/rules.rs
// Purpose: Ordered validator lists per field

use std::collections::HashMap;
use std::fmt;

use model_validator_rules::{FieldValidator, Model, Value};
use tracing::trace;

/// Per-field validator lists
///
/// Validators for a field run in insertion order and the first failure
/// wins. Fields without an entry are always valid.
#[derive(Default)]
pub struct Rules {
    fields: HashMap<String, Vec<Box<dyn FieldValidator>>>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the validator list of a field
    pub fn field(mut self, name: impl Into<String>, validators: Vec<Box<dyn FieldValidator>>) -> Self {
        self.fields.insert(name.into(), validators);
        self
    }

    /// Append one validator to the end of a field's list
    pub fn push(mut self, name: impl Into<String>, validator: impl FieldValidator + 'static) -> Self {
        self.fields
            .entry(name.into())
            .or_default()
            .push(Box::new(validator));
        self
    }

    pub fn get(&self, name: &str) -> Option<&[Box<dyn FieldValidator>]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Message of the first failing validator for `name`, or an empty
    /// string when every validator passes
    pub fn check(&self, name: &str, value: &Value, values: &Model) -> String {
        let Some(validators) = self.get(name) else {
            return String::new();
        };

        match validators
            .iter()
            .find_map(|validator| validator.check(value, values).err())
        {
            Some(message) => {
                trace!("Field '{}' failed: {}", name, message);
                message
            }
            None => String::new(),
        }
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, validators) in &self.fields {
            map.entry(name, &validators.len());
        }
        map.finish()
    }
}
