//! Error types for SoilView

use std::fmt;
use thiserror::Error;

/// Form field checked by the login and signup stubs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        };
        f.write_str(name)
    }
}

/// A required form field was left empty.
///
/// The display text is the prompt shown to the user; callers recover by
/// re-prompting, never by aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both email and password.")]
    MissingCredentials { missing: Vec<Field> },

    #[error("Please fill out all fields.")]
    IncompleteSignup { missing: Vec<Field> },
}

impl ValidationError {
    /// Fields that were empty, in form order
    pub fn missing(&self) -> &[Field] {
        match self {
            ValidationError::MissingCredentials { missing }
            | ValidationError::IncompleteSignup { missing } => missing,
        }
    }
}

#[derive(Debug, Error)]
pub enum SoilviewError {
    // Form errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Routing errors
    #[error("Unknown view: {name}")]
    UnknownView { name: String },

    #[error("Unknown variant: {name}. Use basic, portal, or dashboard")]
    UnknownVariant { name: String },

    // Collaborator errors
    #[error("Failed to acquire display URL for {file}: {reason}")]
    DisplayUrl { file: String, reason: String },

    #[error("Chart rendering failed on canvas {canvas}: {reason}")]
    Chart { canvas: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SoilviewError>;
