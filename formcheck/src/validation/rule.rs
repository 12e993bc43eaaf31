//! The rule abstraction and the ordered rule registry.

use std::fmt;

use formdom::{Element, find_element};

use super::result::FailureKind;
use super::rules::{MatchRule, MaxLengthRule, MinLengthRule, PatternRule, RequiredRule};
use crate::config::RuleAttributes;
use crate::group::FieldGroup;

/// A control under evaluation together with the argument of the attribute
/// that triggered the rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub control: &'a Element,
    /// Value of the triggering attribute (empty for boolean attributes).
    pub argument: &'a str,
}

/// Read-only view of the form for rules that look beyond their own control.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub form: &'a Element,
    pub groups: &'a [FieldGroup],
}

impl<'a> RuleContext<'a> {
    pub fn new(form: &'a Element, groups: &'a [FieldGroup]) -> Self {
        Self { form, groups }
    }

    /// Find a control of the form by id.
    pub fn control(&self, id: &str) -> Option<&'a Element> {
        find_element(self.form, id).filter(|el| el.is_control())
    }

    /// Label of the field-group containing the control `id`.
    pub fn label_for(&self, id: &str) -> Option<&'a str> {
        self.groups
            .iter()
            .find(|group| group.contains(id))
            .map(|group| group.label.as_str())
    }
}

/// An attribute-triggered validation rule.
///
/// A rule applies to a control when its attribute is present on the control
/// (or on the field-group element for grouped controls). Rules never panic on
/// malformed attribute values; they report the control as invalid instead.
pub trait Rule: Send + Sync {
    /// Attribute whose presence triggers this rule.
    fn attribute(&self) -> &str;

    /// Whether the control satisfies the rule.
    fn is_valid(&self, input: &RuleInput<'_>, cx: &RuleContext<'_>) -> bool;

    /// Message shown when the rule fails. `label` names the field.
    fn error_message(&self, input: &RuleInput<'_>, label: &str, cx: &RuleContext<'_>) -> String;

    /// Classification of a failure of this rule.
    fn failure_kind(&self, input: &RuleInput<'_>, cx: &RuleContext<'_>) -> FailureKind;
}

/// Ordered collection of rules.
///
/// Evaluation order is registration order, and the first failing rule
/// decides a group's message.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The canonical rules keyed by the given attribute names: minimum length,
    /// maximum length, pattern, cross-field match, required.
    pub fn standard(attributes: &RuleAttributes) -> Self {
        Self::new()
            .with(MinLengthRule::new(&attributes.min_length))
            .with(MaxLengthRule::new(&attributes.max_length))
            .with(PatternRule::new(&attributes.pattern))
            .with(MatchRule::new(&attributes.matches))
            .with(RequiredRule::new(&attributes.required))
    }

    /// Append a rule (builder form of [`push`](Self::push)).
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule. A rule already keyed by the same attribute is replaced
    /// in place.
    pub fn push(&mut self, rule: impl Rule + 'static) {
        match self.position(rule.attribute()) {
            Some(pos) => self.rules[pos] = Box::new(rule),
            None => self.rules.push(Box::new(rule)),
        }
    }

    /// Insert a rule so it is evaluated before the rule keyed by `attribute`.
    /// Appends when no such rule exists.
    pub fn insert_before(&mut self, attribute: &str, rule: impl Rule + 'static) {
        self.remove(rule.attribute());
        match self.position(attribute) {
            Some(pos) => self.rules.insert(pos, Box::new(rule)),
            None => self.rules.push(Box::new(rule)),
        }
    }

    /// Remove the rule keyed by `attribute`. Returns whether one was removed.
    pub fn remove(&mut self, attribute: &str) -> bool {
        match self.position(attribute) {
            Some(pos) => {
                self.rules.remove(pos);
                true
            }
            None => false,
        }
    }

    /// The rule keyed by `attribute`.
    pub fn get(&self, attribute: &str) -> Option<&(dyn Rule + 'static)> {
        self.position(attribute).map(|pos| self.rules[pos].as_ref())
    }

    /// Rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule + 'static)> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Attribute names in evaluation order.
    pub fn attributes(&self) -> Vec<&str> {
        self.iter().map(|rule| rule.attribute()).collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn position(&self, attribute: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.attribute() == attribute)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.attributes()).finish()
    }
}
