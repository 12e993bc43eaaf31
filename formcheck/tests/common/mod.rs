#![allow(dead_code)]

use formdom::Element;

pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Status indicators and error slot shared by every field-group.
fn status_parts() -> Vec<Element> {
    vec![
        Element::span().class("success-icon").class("hidden"),
        Element::span().class("error-icon").class("hidden"),
        Element::p("").class("error"),
    ]
}

/// A single-control field-group.
pub fn field_group(label: &str, control: Element) -> Element {
    Element::div()
        .class("formGroup")
        .child(Element::label(label))
        .child(control)
        .children(status_parts())
}

/// The registration form used throughout the tests.
pub fn registration_form() -> Element {
    Element::form()
        .id("registrationForm")
        .child(field_group(
            "Username",
            Element::input("text")
                .id("username")
                .flag("required")
                .attr("custommaxlength", "20"),
        ))
        .child(field_group(
            "Email",
            Element::input("email")
                .id("email")
                .flag("required")
                .attr("pattern", EMAIL_PATTERN),
        ))
        .child(field_group(
            "Password",
            Element::input("password")
                .id("password")
                .flag("required")
                .attr("minlength", "8"),
        ))
        .child(field_group(
            "Confirm Password",
            Element::input("password")
                .id("confirmPassword")
                .flag("required")
                .attr("match", "password"),
        ))
        .child(
            Element::div()
                .class("formGroup")
                .flag("required")
                .child(Element::p("Favourite food"))
                .child(Element::label("Ham"))
                .child(
                    Element::input("radio")
                        .id("ham")
                        .attr("name", "food")
                        .value("ham"),
                )
                .child(Element::label("Eggs"))
                .child(
                    Element::input("radio")
                        .id("eggs")
                        .attr("name", "food")
                        .value("eggs"),
                )
                .children(status_parts()),
        )
        .child(field_group(
            "Bio",
            Element::textarea().id("bio").attr("custommaxlength", "10"),
        ))
}

/// A document wrapping the registration form.
pub fn registration_page() -> Element {
    Element::new("body")
        .child(Element::new("h1").text("Register"))
        .child(registration_form())
}

/// Values satisfying every rule of the registration form.
pub const VALID_VALUES: &[(&str, &str)] = &[
    ("username", "ferris"),
    ("email", "ferris@rust-lang.org"),
    ("password", "crabcrab"),
    ("confirmPassword", "crabcrab"),
];
