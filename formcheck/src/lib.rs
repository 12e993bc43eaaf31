//! Declarative, attribute-driven form validation.
//!
//! A [`FormController`] attaches to a form in a [`formdom`] document, records
//! its field-groups once, and reacts to UI events: a blur validates the
//! enclosing field-group, a submit validates every group and hands the
//! values to a [`Submitter`] only when all of them pass. Results are written
//! back into the document as error text, state classes and indicator
//! visibility.

pub mod config;
pub mod controller;
pub mod error;
pub mod group;
pub mod validation;
pub mod values;

pub use config::{RuleAttributes, ValidatorConfig};
pub use controller::{FormController, NoopSubmitter, Outcome, Submitter};
pub use error::{FormError, GroupPart, SubmitError};
pub use group::FieldGroup;
pub use values::FormValues;

pub mod prelude {
    pub use crate::config::{RuleAttributes, ValidatorConfig};
    pub use crate::controller::{FormController, NoopSubmitter, Outcome, Submitter};
    pub use crate::error::{FormError, SubmitError};
    pub use crate::validation::{
        FailureKind, FieldError, FormReport, FormValidator, Rule, RuleSet, ValidationResult,
    };
    pub use crate::values::FormValues;

    pub use formdom::{Element, Event};
}
