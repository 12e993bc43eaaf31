//! Built-in rules.

use std::collections::HashMap;
use std::sync::RwLock;

use log::warn;
use regex::Regex;

use super::result::FailureKind;
use super::rule::{Rule, RuleContext, RuleInput};

/// Parse a length argument, logging when it is malformed.
fn parse_length(attribute: &str, input: &RuleInput<'_>) -> Option<usize> {
    match input.argument.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(
                "Control {:?} has a non-numeric {} value {:?}",
                input.control.id_str(),
                attribute,
                input.argument
            );
            None
        }
    }
}

fn char_len(input: &RuleInput<'_>) -> usize {
    input.control.value.chars().count()
}

/// The match attribute may name the target as `id` or `#id`.
fn match_target(argument: &str) -> &str {
    let argument = argument.trim();
    argument.strip_prefix('#').unwrap_or(argument)
}

// -----------------------------------------------------------------------------
// Length
// -----------------------------------------------------------------------------

/// Fails when the value has fewer characters than the attribute's value.
#[derive(Debug, Clone)]
pub struct MinLengthRule {
    attribute: String,
}

impl MinLengthRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Rule for MinLengthRule {
    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn is_valid(&self, input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> bool {
        parse_length(&self.attribute, input).is_some_and(|min| char_len(input) >= min)
    }

    fn error_message(&self, input: &RuleInput<'_>, label: &str, _cx: &RuleContext<'_>) -> String {
        format!("{label} needs to be at least {} characters", input.argument.trim())
    }

    fn failure_kind(&self, _input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> FailureKind {
        FailureKind::TooShort
    }
}

/// Fails when the value has more characters than the attribute's value.
#[derive(Debug, Clone)]
pub struct MaxLengthRule {
    attribute: String,
}

impl MaxLengthRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Rule for MaxLengthRule {
    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn is_valid(&self, input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> bool {
        parse_length(&self.attribute, input).is_some_and(|max| char_len(input) <= max)
    }

    fn error_message(&self, input: &RuleInput<'_>, label: &str, _cx: &RuleContext<'_>) -> String {
        format!("{label} needs to be less than {} characters", input.argument.trim())
    }

    fn failure_kind(&self, _input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> FailureKind {
        FailureKind::TooLong
    }
}

// -----------------------------------------------------------------------------
// Pattern
// -----------------------------------------------------------------------------

/// Fails when the value contains no match of the attribute's regular
/// expression. The search is unanchored.
#[derive(Debug)]
pub struct PatternRule {
    attribute: String,
    /// Compiled expressions by source; `None` for sources that do not compile.
    compiled: RwLock<HashMap<String, Option<Regex>>>,
}

impl PatternRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            compiled: RwLock::new(HashMap::new()),
        }
    }

    fn matches(&self, source: &str, value: &str) -> bool {
        if let Ok(cache) = self.compiled.read()
            && let Some(entry) = cache.get(source)
        {
            return entry.as_ref().is_some_and(|re| re.is_match(value));
        }

        let compiled = match Regex::new(source) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Invalid {} expression {:?}: {}", self.attribute, source, e);
                None
            }
        };
        let is_match = compiled.as_ref().is_some_and(|re| re.is_match(value));
        if let Ok(mut cache) = self.compiled.write() {
            cache.insert(source.to_string(), compiled);
        }
        is_match
    }
}

impl Rule for PatternRule {
    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn is_valid(&self, input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> bool {
        self.matches(input.argument, &input.control.value)
    }

    fn error_message(&self, _input: &RuleInput<'_>, label: &str, _cx: &RuleContext<'_>) -> String {
        format!("Not a valid {label}")
    }

    fn failure_kind(&self, _input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> FailureKind {
        FailureKind::PatternMismatch
    }
}

// -----------------------------------------------------------------------------
// Cross-field match
// -----------------------------------------------------------------------------

/// Fails unless the value equals, after trimming, the value of the control
/// named by the attribute. A target that cannot be found fails as well.
#[derive(Debug, Clone)]
pub struct MatchRule {
    attribute: String,
}

impl MatchRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Rule for MatchRule {
    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn is_valid(&self, input: &RuleInput<'_>, cx: &RuleContext<'_>) -> bool {
        cx.control(match_target(input.argument))
            .is_some_and(|target| target.value.trim() == input.control.value.trim())
    }

    fn error_message(&self, input: &RuleInput<'_>, label: &str, cx: &RuleContext<'_>) -> String {
        let target = match_target(input.argument);
        let target_label = cx.label_for(target).unwrap_or(target);
        format!("{label} should match {target_label}")
    }

    fn failure_kind(&self, input: &RuleInput<'_>, cx: &RuleContext<'_>) -> FailureKind {
        if cx.control(match_target(input.argument)).is_some() {
            FailureKind::Mismatch
        } else {
            FailureKind::MissingMatchTarget
        }
    }
}

// -----------------------------------------------------------------------------
// Required
// -----------------------------------------------------------------------------

/// Fails when the trimmed value is empty, or when an exclusive-choice control
/// is not checked.
#[derive(Debug, Clone)]
pub struct RequiredRule {
    attribute: String,
}

impl RequiredRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Rule for RequiredRule {
    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn is_valid(&self, input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> bool {
        if input.control.is_exclusive_choice() {
            return input.control.checked;
        }
        !input.control.value.trim().is_empty()
    }

    fn error_message(&self, _input: &RuleInput<'_>, label: &str, _cx: &RuleContext<'_>) -> String {
        format!("{label} is required")
    }

    fn failure_kind(&self, _input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> FailureKind {
        FailureKind::Required
    }
}
