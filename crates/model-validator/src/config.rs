// File: src/config.rs
// Purpose: Form defaults loaded from TOML or JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use model_validator_rules::Model;

use crate::engine::ModelValidator;
use crate::error::FormError;
use crate::rules::Rules;

/// Form configuration
///
/// ```toml
/// [form]
/// name = "signup"
///
/// [defaults]
/// name = ""
/// code = 1
/// isActive = false
/// ```
///
/// Only default values live here; rules are always built in code.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,

    #[serde(default)]
    pub defaults: Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "form".to_string()
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid form config {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, FormError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Build a named validator from the configured defaults
    pub fn into_validator(self, rules: Rules) -> ModelValidator {
        ModelValidator::new(self.defaults, rules).with_name(self.form.name)
    }
}

/// Parse a flat JSON object into a model, e.g. data loaded for
/// [`ModelValidator::set_initial_values`]
pub fn parse_model_json(json: &str) -> std::result::Result<Model, FormError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_validator_rules::{model, require_validator, Value};

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.form.name, "form");
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = FormConfig::from_toml_str("  \n").unwrap();
        assert_eq!(config.form.name, "form");
    }

    #[test]
    fn test_defaults_table() {
        let toml = r#"
            [form]
            name = "signup"

            [defaults]
            name = ""
            code = 1
            isActive = false
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.form.name, "signup");
        assert_eq!(config.defaults, model! { "name" => "", "code" => 1, "isActive" => false });

        let form = config.into_validator(Rules::new().push("name", require_validator("required")));
        assert_eq!(form.name(), "signup");
        assert_eq!(form.value("code"), Some(&Value::from(1)));
    }

    #[test]
    fn test_nested_defaults_rejected() {
        let toml = r#"
            [defaults]
            tags = ["a", "b"]
        "#;
        assert!(matches!(FormConfig::from_toml_str(toml), Err(FormError::Toml(_))));
    }

    #[test]
    fn test_missing_file_gives_default() {
        let config = FormConfig::load("does-not-exist/form.toml").unwrap();
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_load_empty_file_gives_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("form.toml");
        fs::write(&path, "\n  \n").unwrap();

        let config = FormConfig::load(&path).unwrap();
        assert_eq!(config.form.name, "form");
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("form.toml");
        fs::write(&path, "[form]\nname = \"signup\"\n\n[defaults]\ncode = 1\n").unwrap();

        let config = FormConfig::load(&path).unwrap();
        assert_eq!(config.form.name, "signup");
        assert_eq!(config.defaults, model! { "code" => 1 });
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[defaults\nname = ").unwrap();

        let err = FormConfig::load(&path).unwrap_err();
        let top = err.to_string();
        assert!(top.starts_with("Invalid form config"), "{}", top);
        assert!(top.contains("bad.toml"), "{}", top);
        assert!(err.chain().any(|cause| cause.to_string().contains("TOML parse error")));
        assert!(matches!(err.downcast_ref::<FormError>(), Some(FormError::Toml(_))));

        let full = format!("{:#}", err);
        assert_eq!(full.matches("form config").count(), 1, "{}", full);
    }

    #[test]
    fn test_parse_model_json() {
        let model = parse_model_json(r#"{"name":"name","code":5}"#).unwrap();
        assert_eq!(model, model! { "name" => "name", "code" => 5 });
        assert!(matches!(parse_model_json("[1]"), Err(FormError::Json(_))));
    }
}
