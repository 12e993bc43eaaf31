mod common;

use common::field_group;
use formcheck::validation::{
    FailureKind, FormValidator, RequiredRule, Rule, RuleContext, RuleInput, RuleSet,
};
use formcheck::{RuleAttributes, ValidatorConfig};
use formdom::Element;

/// Rejects values containing a space.
struct NoSpaces;

impl Rule for NoSpaces {
    fn attribute(&self) -> &str {
        "nospaces"
    }

    fn is_valid(&self, input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> bool {
        !input.control.value.contains(' ')
    }

    fn error_message(&self, _input: &RuleInput<'_>, label: &str, _cx: &RuleContext<'_>) -> String {
        format!("{label} must not contain spaces")
    }

    fn failure_kind(&self, _input: &RuleInput<'_>, _cx: &RuleContext<'_>) -> FailureKind {
        FailureKind::Custom
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_standard_rule_order() {
    let rules = RuleSet::standard(&RuleAttributes::default());
    assert_eq!(
        rules.attributes(),
        vec!["minlength", "custommaxlength", "pattern", "match", "required"]
    );
}

#[test]
fn test_standard_rules_follow_configured_attributes() {
    let attributes = RuleAttributes {
        max_length: "maxlength".to_string(),
        ..Default::default()
    };
    let rules = RuleSet::standard(&attributes);
    assert!(rules.get("maxlength").is_some());
    assert!(rules.get("custommaxlength").is_none());
}

#[test]
fn test_push_replaces_rule_with_same_attribute() {
    let mut rules = RuleSet::standard(&RuleAttributes::default());
    rules.push(RequiredRule::new("required"));
    assert_eq!(rules.len(), 5);
    assert_eq!(rules.attributes().last(), Some(&"required"));
}

#[test]
fn test_insert_before_and_remove() {
    let mut rules = RuleSet::standard(&RuleAttributes::default());
    rules.insert_before("minlength", NoSpaces);
    assert_eq!(rules.attributes().first(), Some(&"nospaces"));

    assert!(rules.remove("pattern"));
    assert!(!rules.remove("pattern"));
    assert_eq!(rules.len(), 5);
}

#[test]
fn test_insert_before_unknown_appends() {
    let mut rules = RuleSet::new();
    assert!(rules.is_empty());
    rules.insert_before("nothing", NoSpaces);
    assert_eq!(rules.attributes(), vec!["nospaces"]);
}

// ============================================================================
// Custom rules
// ============================================================================

#[test]
fn test_custom_rule_runs_without_orchestration_changes() {
    let form = Element::form().child(field_group(
        "Handle",
        Element::input("text")
            .id("handle")
            .flag("required")
            .flag("nospaces")
            .value("rust acean"),
    ));
    let rules = RuleSet::standard(&RuleAttributes::default()).with(NoSpaces);
    let validator =
        FormValidator::with_rules(&form, ValidatorConfig::default(), rules).expect("valid form");

    let result = validator.evaluate_group(&form, 0);
    assert_eq!(result.message(), Some("Handle must not contain spaces"));
    assert_eq!(result.error().map(|e| e.kind), Some(FailureKind::Custom));
}

#[test]
fn test_removed_rule_no_longer_applies() {
    let form = Element::form().child(field_group(
        "Name",
        Element::input("text").id("name").flag("required"),
    ));
    let mut rules = RuleSet::standard(&RuleAttributes::default());
    rules.remove("required");
    let validator =
        FormValidator::with_rules(&form, ValidatorConfig::default(), rules).expect("valid form");

    assert!(validator.evaluate_group(&form, 0).is_valid());
}
