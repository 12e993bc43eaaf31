//! Single-group and whole-form validation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use formdom::Element;
use log::{debug, trace, warn};

use super::render::render_group;
use super::result::{FailureKind, FieldError, FormReport, ValidationResult};
use super::rule::{Rule, RuleContext, RuleInput, RuleSet};
use crate::config::ValidatorConfig;
use crate::error::FormError;
use crate::group::FieldGroup;

/// Validates the field-groups of one form.
///
/// The validator holds the rule registry and the field-group records built
/// when it was created. It does not own the form: every call receives the
/// form element the records were built from.
///
/// # Example
///
/// ```ignore
/// let validator = FormValidator::new(&form, ValidatorConfig::default())?;
///
/// if validator.validate_form(&mut form).is_valid() {
///     // hand the values to the submitter
/// }
/// ```
#[derive(Debug)]
pub struct FormValidator {
    rules: RuleSet,
    groups: Vec<FieldGroup>,
    by_control: HashMap<String, usize>,
    config: ValidatorConfig,
}

impl FormValidator {
    /// Build a validator with the standard rules keyed by the configured
    /// attribute names.
    pub fn new(form: &Element, config: ValidatorConfig) -> Result<Self, FormError> {
        let rules = RuleSet::standard(&config.attributes);
        Self::with_rules(form, config, rules)
    }

    /// Build a validator with a custom rule registry.
    pub fn with_rules(
        form: &Element,
        config: ValidatorConfig,
        rules: RuleSet,
    ) -> Result<Self, FormError> {
        let groups = FieldGroup::collect(form, &config)?;

        let mut by_control = HashMap::new();
        for group in &groups {
            for id in &group.control_ids {
                match by_control.entry(id.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(group.index);
                    }
                    Entry::Occupied(first) => warn!(
                        "Control {id:?} appears in field groups {} and {}; using {}",
                        first.get(),
                        group.index,
                        first.get()
                    ),
                }
            }
        }

        debug!(
            "Validator built: {} field groups, rules {:?}",
            groups.len(),
            rules
        );

        Ok(Self {
            rules,
            groups,
            by_control,
            config,
        })
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Index of the field-group enclosing the control `id`.
    pub fn group_of(&self, id: &str) -> Option<usize> {
        self.by_control.get(id).copied()
    }

    // -------------------------------------------------------------------------
    // Evaluation
    // -------------------------------------------------------------------------

    /// Evaluate one group without touching the form.
    ///
    /// Rules run in registry order and the first failure decides the result.
    /// For each rule, the group element's attribute is checked first (valid
    /// when any member control passes), then the primary control's.
    pub fn evaluate_group(&self, form: &Element, index: usize) -> ValidationResult {
        let Some(group) = self.groups.get(index) else {
            return ValidationResult::Valid;
        };
        let cx = RuleContext::new(form, &self.groups);

        let group_el = group.path.resolve(form);
        let primary = group.primary().and_then(|p| p.resolve(form));
        let (Some(group_el), Some(primary)) = (group_el, primary) else {
            warn!("Field group {index} no longer resolves in the form");
            return ValidationResult::Invalid(FieldError {
                group: index,
                control_id: None,
                attribute: String::new(),
                kind: FailureKind::MissingElement,
                label: group.label.clone(),
                message: format!("{} is missing", group.label),
            });
        };
        let members: Vec<&Element> = group
            .controls
            .iter()
            .filter_map(|p| p.resolve(form))
            .collect();

        for rule in self.rules.iter() {
            let attribute = rule.attribute();

            if let Some(argument) = group_el.attr_value(attribute) {
                let any_valid = members
                    .iter()
                    .any(|&control| rule.is_valid(&RuleInput { control, argument }, &cx));
                trace!("group {index}: group-level {attribute} -> {any_valid}");
                if !any_valid {
                    let input = RuleInput {
                        control: primary,
                        argument,
                    };
                    return self.failure(group, rule, &input, group.legend_or_label(), &cx);
                }
            }

            if let Some(argument) = primary.attr_value(attribute) {
                let input = RuleInput {
                    control: primary,
                    argument,
                };
                let valid = if primary.is_exclusive_choice() {
                    // One checked member satisfies the whole choice set
                    members
                        .iter()
                        .filter(|control| control.is_exclusive_choice())
                        .any(|&control| rule.is_valid(&RuleInput { control, argument }, &cx))
                } else {
                    rule.is_valid(&input, &cx)
                };
                trace!("group {index}: {attribute} -> {valid}");
                if !valid {
                    return self.failure(group, rule, &input, &group.label, &cx);
                }
            }
        }

        ValidationResult::Valid
    }

    fn failure(
        &self,
        group: &FieldGroup,
        rule: &dyn Rule,
        input: &RuleInput<'_>,
        label: &str,
        cx: &RuleContext<'_>,
    ) -> ValidationResult {
        ValidationResult::Invalid(FieldError {
            group: group.index,
            control_id: input.control.id.clone(),
            attribute: rule.attribute().to_string(),
            kind: rule.failure_kind(input, cx),
            label: label.to_string(),
            message: rule.error_message(input, label, cx),
        })
    }

    // -------------------------------------------------------------------------
    // Validation (evaluate + render)
    // -------------------------------------------------------------------------

    /// Validate one group and render its state into the form.
    pub fn check_group(&self, form: &mut Element, index: usize) -> ValidationResult {
        let result = self.evaluate_group(form, index);
        if let Some(group) = self.groups.get(index) {
            render_group(form, group, &result, &self.config);
        }
        debug!("group {index} validated: {result:?}");
        result
    }

    /// Validate one group and render its state. Returns whether it is valid.
    pub fn validate_group(&self, form: &mut Element, index: usize) -> bool {
        self.check_group(form, index).is_valid()
    }

    /// Validate the group enclosing the control `id`. `None` when the control
    /// belongs to no group.
    pub fn validate_control(&self, form: &mut Element, id: &str) -> Option<bool> {
        self.group_of(id)
            .map(|index| self.validate_group(form, index))
    }

    /// Validate and render every group. Every group is refreshed, even after
    /// an earlier one failed.
    pub fn validate_form(&self, form: &mut Element) -> FormReport {
        let results = (0..self.groups.len())
            .map(|index| self.check_group(form, index))
            .collect();
        let report = FormReport::new(results);
        debug!(
            "form validated: {} of {} groups invalid",
            report.errors().count(),
            self.groups.len()
        );
        report
    }
}
