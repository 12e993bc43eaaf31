//! Form lifecycle: attaching to a document and reacting to events.

use formdom::{Element, ElementPath, Event, find_element_mut, for_each_mut};
use log::{debug, info, trace, warn};

use crate::config::ValidatorConfig;
use crate::error::{FormError, SubmitError};
use crate::validation::{FormReport, FormValidator, RuleSet, ValidationResult};
use crate::values::FormValues;

/// Attribute that turns off the host's native validation.
const NO_VALIDATE: &str = "novalidate";

/// Receives the values of a form that passed validation.
///
/// Transport is out of scope: implementations forward the values wherever
/// they need to go. Closures taking `(&Element, &FormValues)` implement this
/// trait.
pub trait Submitter {
    fn submit(&mut self, form: &Element, values: &FormValues) -> Result<(), SubmitError>;
}

impl<F> Submitter for F
where
    F: FnMut(&Element, &FormValues) -> Result<(), SubmitError>,
{
    fn submit(&mut self, form: &Element, values: &FormValues) -> Result<(), SubmitError> {
        self(form, values)
    }
}

/// Submitter that accepts everything and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubmitter;

impl Submitter for NoopSubmitter {
    fn submit(&mut self, form: &Element, values: &FormValues) -> Result<(), SubmitError> {
        debug!(
            "NoopSubmitter: dropping {} values of form {:?}",
            values.len(),
            form.id_str()
        );
        Ok(())
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event did not concern this form.
    Ignored,
    /// A control's value or checked state changed.
    Updated,
    /// A blur validated the enclosing field-group.
    FieldValidated {
        group: usize,
        result: ValidationResult,
    },
    /// The form was valid and the submitter accepted the values.
    Submitted { values: FormValues },
    /// The form was invalid; nothing was submitted.
    Rejected { report: FormReport },
    /// The form was valid but the submitter failed.
    SubmitFailed {
        values: FormValues,
        error: SubmitError,
    },
}

impl Outcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// Owns a document, the form inside it, and the form's validator.
///
/// Events from the surrounding UI are fed to [`handle_event`]; blur events
/// validate one field-group, submit events validate every group and hand the
/// values to a [`Submitter`] only when all of them pass.
///
/// [`handle_event`]: FormController::handle_event
#[derive(Debug)]
pub struct FormController {
    document: Element,
    form_path: ElementPath,
    validator: FormValidator,
}

impl FormController {
    /// Attach to the configured form of `document` with the standard rules.
    pub fn attach(document: Element, config: ValidatorConfig) -> Result<Self, FormError> {
        let rules = RuleSet::standard(&config.attributes);
        Self::attach_with_rules(document, config, rules)
    }

    /// Attach with a custom rule registry.
    pub fn attach_with_rules(
        mut document: Element,
        config: ValidatorConfig,
        rules: RuleSet,
    ) -> Result<Self, FormError> {
        let form_id = config.form_id.clone();
        let form_path = match form_id.as_deref() {
            Some(id) => ElementPath::find_first(&document, |el| el.is("form") && el.id_str() == Some(id)),
            None => ElementPath::find_first(&document, |el| el.is("form")),
        }
        .ok_or_else(|| FormError::form_not_found(form_id.as_deref()))?;

        let form = form_path
            .resolve_mut(&mut document)
            .ok_or_else(|| FormError::form_not_found(form_id.as_deref()))?;
        form.set_attr(NO_VALIDATE, "");

        let validator = FormValidator::with_rules(form, config, rules)?;
        info!(
            "Attached to form {:?} with {} field groups",
            form.id_str(),
            validator.groups().len()
        );

        Ok(Self {
            document,
            form_path,
            validator,
        })
    }

    pub fn document(&self) -> &Element {
        &self.document
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// The form element.
    pub fn form(&self) -> &Element {
        self.form_path
            .resolve(&self.document)
            .unwrap_or(&self.document)
    }

    fn form_mut(&mut self) -> Option<&mut Element> {
        self.form_path.resolve_mut(&mut self.document)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// React to one UI event.
    pub fn handle_event<S>(&mut self, event: &Event, submitter: &mut S) -> Outcome
    where
        S: Submitter + ?Sized,
    {
        trace!("handle_event: {event:?}");
        match event {
            Event::Input { target, value } => self.set_value(target, value),
            Event::Toggle { target, checked } => self.set_checked(target, *checked),
            Event::Blur { target } => self.blur(target),
            Event::Submit { target } => {
                if let Some(target) = target
                    && self.form().id_str() != Some(target.as_str())
                {
                    return Outcome::Ignored;
                }
                self.submit(submitter)
            }
        }
    }

    /// Set the value of a control of the form.
    pub fn set_value(&mut self, id: &str, value: &str) -> Outcome {
        match self.form_mut().and_then(|form| find_control_mut(form, id)) {
            Some(control) => {
                control.set_value(value);
                Outcome::Updated
            }
            None => Outcome::Ignored,
        }
    }

    /// Check or uncheck a control. Checking a radio unchecks the other radios
    /// sharing its name.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Outcome {
        let Some(form) = self.form_mut() else {
            return Outcome::Ignored;
        };
        let Some(control) = find_control_mut(form, id) else {
            return Outcome::Ignored;
        };
        control.set_checked(checked);

        let radio_name = (checked && control.is_exclusive_choice())
            .then(|| control.attr_value("name").map(str::to_string))
            .flatten();
        if let Some(name) = radio_name {
            for_each_mut(form, &mut |el: &mut Element| {
                if el.is_exclusive_choice()
                    && el.attr_value("name") == Some(name.as_str())
                    && el.id_str() != Some(id)
                {
                    el.set_checked(false);
                }
            });
        }
        Outcome::Updated
    }

    /// Validate the field-group enclosing the control `id`.
    pub fn blur(&mut self, id: &str) -> Outcome {
        let Some(group) = self.validator.group_of(id) else {
            debug!("Blur on {id:?} outside any field group");
            return Outcome::Ignored;
        };
        let Some(form) = self.form_path.resolve_mut(&mut self.document) else {
            warn!("Form no longer resolves in the document");
            return Outcome::Ignored;
        };
        let result = self.validator.check_group(form, group);
        Outcome::FieldValidated { group, result }
    }

    /// Validate every field-group and, when all pass, submit the values.
    ///
    /// Validation always runs to completion before the submitter is called,
    /// and the submitter is only called for a fully valid form.
    pub fn submit<S>(&mut self, submitter: &mut S) -> Outcome
    where
        S: Submitter + ?Sized,
    {
        let Some(form) = self.form_path.resolve_mut(&mut self.document) else {
            warn!("Form no longer resolves in the document");
            return Outcome::Ignored;
        };

        let report = self.validator.validate_form(form);
        if report.is_invalid() {
            debug!(
                "Submission blocked: first error {:?}",
                report.first_error().map(|e| e.message.as_str())
            );
            return Outcome::Rejected { report };
        }

        let values = FormValues::collect(form);
        match submitter.submit(form, &values) {
            Ok(()) => {
                info!("Form submitted with {} values", values.len());
                Outcome::Submitted { values }
            }
            Err(error) => {
                warn!("Submitter failed: {error}");
                Outcome::SubmitFailed { values, error }
            }
        }
    }

    /// Validate the whole form without submitting.
    pub fn validate(&mut self) -> FormReport {
        match self.form_path.resolve_mut(&mut self.document) {
            Some(form) => self.validator.validate_form(form),
            None => FormReport::default(),
        }
    }
}

fn find_control_mut<'a>(form: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    find_element_mut(form, id).filter(|el| el.is_control())
}
