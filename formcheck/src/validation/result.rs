use std::fmt;

use serde::Serialize;

/// Why a field-group failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Required,
    TooShort,
    TooLong,
    PatternMismatch,
    Mismatch,
    MissingMatchTarget,
    /// A part recorded at attach time no longer resolves in the document.
    MissingElement,
    /// Raised by a rule registered by the caller.
    Custom,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::TooShort => "too short",
            Self::TooLong => "too long",
            Self::PatternMismatch => "pattern mismatch",
            Self::Mismatch => "mismatch",
            Self::MissingMatchTarget => "missing match target",
            Self::MissingElement => "missing element",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Information about a single field-group validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Index of the field-group.
    pub group: usize,
    /// Id of the group's primary control (for focusing).
    pub control_id: Option<String>,
    /// Attribute of the rule that failed.
    pub attribute: String,
    pub kind: FailureKind,
    /// Name of the field as it appears in the message: the group's label, or
    /// its legend for a rule declared on the group element.
    pub label: String,
    /// Message displayed in the group's error slot.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.control_id {
            Some(id) => write!(f, "{}: {} ({})", id, self.message, self.kind),
            None => write!(f, "group {}: {} ({})", self.group, self.message, self.kind),
        }
    }
}

/// Outcome of validating one field-group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(FieldError),
}

impl ValidationResult {
    /// Check if the group passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the group failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The failure, if the group failed.
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// The message to display, if any.
    pub fn message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }
}

/// Result of validating every field-group of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    results: Vec<ValidationResult>,
}

impl FormReport {
    pub(crate) fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// Check if every group passed validation.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(ValidationResult::is_valid)
    }

    /// Check if any group failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Per-group results, indexed by group.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Result of the group at index `group`.
    pub fn result(&self, group: usize) -> Option<&ValidationResult> {
        self.results.get(group)
    }

    /// All failures, in document order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.results.iter().filter_map(ValidationResult::error)
    }

    /// First failure in document order.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().next()
    }

    /// Id of the first invalid control (for focusing).
    pub fn first_invalid_control(&self) -> Option<&str> {
        self.first_error().and_then(|e| e.control_id.as_deref())
    }
}
