// File: src/error.rs
// Purpose: Errors raised while loading defaults

use thiserror::Error;

/// Failures while reading form defaults.
///
/// Field validation failures are never reported here; they live in the
/// error set of a [`ModelValidator`](crate::ModelValidator).
#[derive(Debug, Error)]
pub enum FormError {
    // toml messages already read "TOML parse error ..."
    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse model JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
