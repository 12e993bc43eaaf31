//! Error types for attaching a validator and submitting a form.
//!
//! Validation failures are not errors: they are reported as
//! [`ValidationResult`](crate::validation::ValidationResult) values.

use std::fmt;

use thiserror::Error;

/// A structural part every field-group must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPart {
    Control,
    ErrorSlot,
    Label,
}

impl fmt::Display for GroupPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Control => write!(f, "input control"),
            Self::ErrorSlot => write!(f, "error slot"),
            Self::Label => write!(f, "label"),
        }
    }
}

/// Errors raised while attaching a validator to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No form element with the requested id (or no form at all).
    #[error("Form {} not found in document", describe_form(.id))]
    FormNotFound { id: Option<String> },

    /// A field-group is missing one of its required parts.
    #[error("Field group {group} at {path} has no {part}")]
    MissingPart {
        group: usize,
        path: String,
        part: GroupPart,
    },
}

impl FormError {
    pub fn form_not_found(id: Option<&str>) -> Self {
        Self::FormNotFound {
            id: id.map(str::to_string),
        }
    }

    pub fn missing_part(group: usize, path: impl fmt::Display, part: GroupPart) -> Self {
        Self::MissingPart {
            group,
            path: path.to_string(),
            part,
        }
    }
}

fn describe_form(id: &Option<String>) -> String {
    match id {
        Some(id) => format!("'{id}'"),
        None => "element".to_string(),
    }
}

/// Errors reported by a [`Submitter`](crate::controller::Submitter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side refused the values.
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The values never reached the receiving side.
    #[error("Submission failed: {0}")]
    Transport(String),
}
