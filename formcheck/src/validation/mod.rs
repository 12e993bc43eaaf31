//! Attribute-driven validation of field-groups.
//!
//! Controls declare what they require through attributes (`required`,
//! `minlength`, `custommaxlength`, `pattern`, `match`). Each attribute keys a
//! [`Rule`] in an ordered [`RuleSet`]; the first failing rule decides the
//! message shown for a group.
//!
//! # Example
//!
//! ```ignore
//! use formcheck::validation::{FormValidator, RuleSet};
//!
//! let validator = FormValidator::new(&form, ValidatorConfig::default())?;
//!
//! // On blur of the password control
//! validator.validate_control(&mut form, "password");
//!
//! // On submit
//! let report = validator.validate_form(&mut form);
//! if let Some(error) = report.first_error() {
//!     println!("{error}");
//! }
//! ```

mod render;
mod result;
mod rule;
mod rules;
mod validator;

pub use render::render_group;
pub use result::{FailureKind, FieldError, FormReport, ValidationResult};
pub use rule::{Rule, RuleContext, RuleInput, RuleSet};
pub use rules::{MatchRule, MaxLengthRule, MinLengthRule, PatternRule, RequiredRule};
pub use validator::FormValidator;
