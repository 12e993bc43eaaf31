mod common;

use common::{field_group, registration_form};
use formcheck::validation::{FailureKind, FormValidator, ValidationResult};
use formcheck::{FormError, GroupPart, ValidatorConfig};
use formdom::{Element, find_element, find_element_mut};

const USERNAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;
const CONFIRM: usize = 3;
const FOOD: usize = 4;
const BIO: usize = 5;

fn setup() -> (Element, FormValidator) {
    let form = registration_form();
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");
    (form, validator)
}

fn set_value(form: &mut Element, id: &str, value: &str) {
    find_element_mut(form, id).expect("control").set_value(value);
}

fn message(result: &ValidationResult) -> &str {
    result.message().unwrap_or_default()
}

/// First element with `class` inside the group at `index`.
fn part<'a>(form: &'a Element, validator: &FormValidator, index: usize, class: &str) -> &'a Element {
    let group = &validator.groups()[index];
    let group_el = group.path.resolve(form).expect("group");
    formdom::find_first(group_el, |el| el.has_class(class)).expect("part")
}

// ============================================================================
// Group records
// ============================================================================

#[test]
fn test_groups_are_recorded_in_document_order() {
    let (_, validator) = setup();
    let labels: Vec<_> = validator.groups().iter().map(|g| g.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Username", "Email", "Password", "Confirm Password", "Ham", "Bio"]
    );
    assert_eq!(validator.groups()[FOOD].legend.as_deref(), Some("Favourite food"));
    assert_eq!(validator.groups()[FOOD].control_ids, vec!["ham", "eggs"]);
}

#[test]
fn test_group_of_maps_controls_to_groups() {
    let (_, validator) = setup();
    assert_eq!(validator.group_of("password"), Some(PASSWORD));
    assert_eq!(validator.group_of("eggs"), Some(FOOD));
    assert_eq!(validator.group_of("nope"), None);
}

#[test]
fn test_control_in_nested_groups_belongs_to_outer_group() {
    let mut form = Element::form()
        .child(
            Element::div()
                .class("formGroup")
                .child(Element::label("Outer"))
                .child(Element::p("").class("error"))
                .child(
                    Element::div()
                        .class("formGroup")
                        .child(Element::label("Inner"))
                        .child(Element::input("text").id("a").flag("required"))
                        .child(Element::p("").class("error")),
                ),
        )
        .child(field_group(
            "B",
            Element::input("text").id("b").attr("match", "a").value("x"),
        ));
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");

    assert_eq!(validator.groups().len(), 3);
    assert_eq!(validator.group_of("a"), Some(0));

    assert_eq!(validator.validate_control(&mut form, "a"), Some(false));
    assert_eq!(part(&form, &validator, 0, "error").text, "Outer is required");
    assert_eq!(
        message(&validator.evaluate_group(&form, 2)),
        "B should match Outer"
    );
}

#[test]
fn test_hint_paragraph_does_not_rename_text_group() {
    let form = Element::form().child(
        Element::div()
            .class("formGroup")
            .flag("required")
            .child(Element::label("Nickname"))
            .child(Element::p("Shown to other players"))
            .child(Element::input("text").id("nickname"))
            .child(Element::p("").class("error")),
    );
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");
    assert_eq!(validator.groups()[0].legend, None);
    assert_eq!(validator.groups()[0].legend_or_label(), "Nickname");

    let result = validator.evaluate_group(&form, 0);
    assert_eq!(result.error().map(|e| e.label.as_str()), Some("Nickname"));
    assert_eq!(message(&result), "Nickname is required");
}

#[test]
fn test_group_without_error_slot_is_rejected() {
    let form = Element::form().child(
        Element::div()
            .class("formGroup")
            .child(Element::label("Name"))
            .child(Element::input("text").id("name")),
    );
    let err = FormValidator::new(&form, ValidatorConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        FormError::MissingPart {
            group: 0,
            part: GroupPart::ErrorSlot,
            ..
        }
    ));
}

#[test]
fn test_group_without_control_is_rejected() {
    let form = Element::form().child(
        Element::div()
            .class("formGroup")
            .child(Element::label("Name"))
            .child(Element::p("").class("error")),
    );
    let err = FormValidator::new(&form, ValidatorConfig::default()).unwrap_err();
    assert!(err.to_string().contains("input control"));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_required_field_shows_required_error() {
    let (mut form, validator) = setup();

    let result = validator.check_group(&mut form, USERNAME);

    assert_eq!(message(&result), "Username is required");
    assert_eq!(result.error().map(|e| e.kind), Some(FailureKind::Required));
    assert_eq!(part(&form, &validator, USERNAME, "error").text, "Username is required");
    assert!(!part(&form, &validator, USERNAME, "error-icon").has_class("hidden"));
    assert!(part(&form, &validator, USERNAME, "success-icon").has_class("hidden"));

    let input = find_element(&form, "username").expect("input");
    assert!(input.has_class("border-red-700"));
    assert!(!input.has_class("border-green-700"));
}

#[test]
fn test_short_password_reports_minimum_length() {
    let (mut form, validator) = setup();
    set_value(&mut form, "password", "abc");

    let result = validator.check_group(&mut form, PASSWORD);

    assert_eq!(message(&result), "Password needs to be at least 8 characters");
    assert_eq!(result.error().map(|e| e.kind), Some(FailureKind::TooShort));
}

#[test]
fn test_mismatched_confirmation_names_matched_label() {
    let (mut form, validator) = setup();
    set_value(&mut form, "password", "abd");
    set_value(&mut form, "confirmPassword", "abc");

    let result = validator.check_group(&mut form, CONFIRM);

    assert_eq!(message(&result), "Confirm Password should match Password");
    assert_eq!(result.error().map(|e| e.kind), Some(FailureKind::Mismatch));
}

#[test]
fn test_valid_group_clears_error_and_shows_success() {
    let (mut form, validator) = setup();

    assert!(!validator.validate_group(&mut form, USERNAME));
    set_value(&mut form, "username", "ferris");
    assert!(validator.validate_group(&mut form, USERNAME));

    assert_eq!(part(&form, &validator, USERNAME, "error").text, "");
    assert!(!part(&form, &validator, USERNAME, "success-icon").has_class("hidden"));
    assert!(part(&form, &validator, USERNAME, "error-icon").has_class("hidden"));

    let input = find_element(&form, "username").expect("input");
    assert!(input.has_class("border-green-700"));
    assert!(!input.has_class("border-red-700"));
}

// ============================================================================
// Rule semantics
// ============================================================================

#[test]
fn test_required_fails_on_whitespace_only() {
    let (mut form, validator) = setup();
    set_value(&mut form, "username", "   ");
    assert_eq!(
        message(&validator.evaluate_group(&form, USERNAME)),
        "Username is required"
    );
}

#[test]
fn test_required_checkbox_checks_value_not_checked_state() {
    let mut form = Element::form().child(field_group(
        "Terms",
        Element::input("checkbox")
            .id("terms")
            .flag("required")
            .value("yes"),
    ));
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");

    assert!(validator.evaluate_group(&form, 0).is_valid());

    set_value(&mut form, "terms", "");
    assert_eq!(
        message(&validator.evaluate_group(&form, 0)),
        "Terms is required"
    );
}

#[test]
fn test_min_length_boundary() {
    let (mut form, validator) = setup();
    set_value(&mut form, "password", "1234567");
    assert!(validator.evaluate_group(&form, PASSWORD).is_invalid());
    set_value(&mut form, "password", "12345678");
    assert!(validator.evaluate_group(&form, PASSWORD).is_valid());
}

#[test]
fn test_min_length_counts_characters_not_bytes() {
    let (mut form, validator) = setup();
    set_value(&mut form, "password", "ééééééé");
    assert!(validator.evaluate_group(&form, PASSWORD).is_invalid());
    set_value(&mut form, "password", "éééééééé");
    assert!(validator.evaluate_group(&form, PASSWORD).is_valid());
}

#[test]
fn test_max_length_boundary() {
    let (mut form, validator) = setup();
    set_value(&mut form, "bio", "0123456789");
    assert!(validator.evaluate_group(&form, BIO).is_valid());

    set_value(&mut form, "bio", "0123456789a");
    let result = validator.evaluate_group(&form, BIO);
    assert_eq!(message(&result), "Bio needs to be less than 10 characters");
    assert_eq!(result.error().map(|e| e.kind), Some(FailureKind::TooLong));
}

#[test]
fn test_optional_field_with_max_length_accepts_empty() {
    let (form, validator) = setup();
    assert!(validator.evaluate_group(&form, BIO).is_valid());
}

#[test]
fn test_pattern_mismatch() {
    let (mut form, validator) = setup();
    set_value(&mut form, "email", "not-an-email");
    let result = validator.evaluate_group(&form, EMAIL);
    assert_eq!(message(&result), "Not a valid Email");
    assert_eq!(result.error().map(|e| e.kind), Some(FailureKind::PatternMismatch));

    set_value(&mut form, "email", "ferris@rust-lang.org");
    assert!(validator.evaluate_group(&form, EMAIL).is_valid());
}

#[test]
fn test_match_ignores_surrounding_whitespace() {
    let (mut form, validator) = setup();
    set_value(&mut form, "password", "crabcrab");
    set_value(&mut form, "confirmPassword", "  crabcrab ");
    assert!(validator.evaluate_group(&form, CONFIRM).is_valid());
}

#[test]
fn test_missing_match_target_is_a_failure() {
    let form = Element::form()
        .child(field_group(
            "Confirm",
            Element::input("text").id("confirm").attr("match", "#ghost"),
        ));
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");

    let result = validator.evaluate_group(&form, 0);

    assert_eq!(
        result.error().map(|e| e.kind),
        Some(FailureKind::MissingMatchTarget)
    );
    assert_eq!(message(&result), "Confirm should match ghost");
}

#[test]
fn test_exclusive_choice_group_requires_one_selection() {
    let (mut form, validator) = setup();

    let result = validator.check_group(&mut form, FOOD);
    assert_eq!(message(&result), "Favourite food is required");

    find_element_mut(&mut form, "eggs").expect("radio").set_checked(true);
    assert!(validator.validate_group(&mut form, FOOD));
    for id in ["ham", "eggs"] {
        assert!(find_element(&form, id).expect("radio").has_class("border-green-700"));
    }
}

#[test]
fn test_required_on_radio_control_is_satisfied_by_any_member() {
    let form = Element::form().child(
        Element::div()
            .class("formGroup")
            .child(Element::label("Yes"))
            .child(Element::input("radio").id("yes").attr("name", "answer").flag("required"))
            .child(Element::label("No"))
            .child(
                Element::input("radio")
                    .id("no")
                    .attr("name", "answer")
                    .checked(true),
            )
            .child(Element::p("").class("error")),
    );
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");
    assert!(validator.evaluate_group(&form, 0).is_valid());
}

#[test]
fn test_first_failing_rule_wins() {
    let form = Element::form().child(field_group(
        "Code",
        Element::input("text")
            .id("code")
            .flag("required")
            .attr("minlength", "4")
            .attr("pattern", "^[0-9]+$"),
    ));
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");

    // Empty fails minlength, pattern and required; minlength comes first
    let result = validator.evaluate_group(&form, 0);
    assert_eq!(message(&result), "Code needs to be at least 4 characters");
    assert_eq!(result.error().map(|e| e.attribute.as_str()), Some("minlength"));
}

#[test]
fn test_malformed_arguments_fail_without_panicking() {
    let form = Element::form()
        .child(field_group(
            "Short",
            Element::input("text").id("short").attr("minlength", "lots").value("abc"),
        ))
        .child(field_group(
            "Code",
            Element::input("text").id("code").attr("pattern", "([0-9]").value("123"),
        ));
    let validator = FormValidator::new(&form, ValidatorConfig::default()).expect("valid form");

    assert!(validator.evaluate_group(&form, 0).is_invalid());
    assert_eq!(
        validator.evaluate_group(&form, 1).error().map(|e| e.kind),
        Some(FailureKind::PatternMismatch)
    );
}

// ============================================================================
// Whole form
// ============================================================================

#[test]
fn test_whole_form_refreshes_every_group() {
    let (mut form, validator) = setup();
    set_value(&mut form, "username", "ferris");

    let report = validator.validate_form(&mut form);

    assert!(report.is_invalid());
    assert_eq!(report.results().len(), validator.groups().len());
    assert!(report.result(USERNAME).is_some_and(|r| r.is_valid()));
    assert!(!part(&form, &validator, USERNAME, "success-icon").has_class("hidden"));
    assert_eq!(
        part(&form, &validator, FOOD, "error").text,
        "Favourite food is required"
    );
    assert_eq!(report.first_invalid_control(), Some("email"));
}

#[test]
fn test_form_valid_iff_every_group_valid() {
    let (mut form, validator) = setup();
    for (id, value) in common::VALID_VALUES {
        set_value(&mut form, id, value);
    }
    find_element_mut(&mut form, "ham").expect("radio").set_checked(true);

    let report = validator.validate_form(&mut form);
    assert!(report.is_valid());
    assert_eq!(report.errors().count(), 0);

    set_value(&mut form, "bio", "far too long for this");
    let report = validator.validate_form(&mut form);
    assert!(report.is_invalid());
    assert_eq!(
        report.is_valid(),
        report.results().iter().all(ValidationResult::is_valid)
    );
}

#[test]
fn test_repeated_validation_keeps_classes_unique() {
    let (mut form, validator) = setup();
    validator.validate_form(&mut form);
    validator.validate_form(&mut form);

    let icon = part(&form, &validator, USERNAME, "success-icon");
    assert_eq!(icon.classes.iter().filter(|c| *c == "hidden").count(), 1);
}

#[test]
fn test_validate_control_targets_enclosing_group() {
    let (mut form, validator) = setup();
    assert_eq!(validator.validate_control(&mut form, "eggs"), Some(false));
    assert_eq!(
        part(&form, &validator, FOOD, "error").text,
        "Favourite food is required"
    );
    assert_eq!(part(&form, &validator, USERNAME, "error").text, "");
    assert_eq!(validator.validate_control(&mut form, "nowhere"), None);
}

#[test]
fn test_validator_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FormValidator>();

    let (form, validator) = setup();
    let validator = std::sync::Arc::new(validator);
    let worker = {
        let validator = std::sync::Arc::clone(&validator);
        let form = form.clone();
        std::thread::spawn(move || validator.evaluate_group(&form, EMAIL).is_valid())
    };
    assert_eq!(worker.join().ok(), Some(false));
}
