//! Rendering validation state into the form.

use formdom::{Element, ElementPath};

use super::result::ValidationResult;
use crate::config::ValidatorConfig;
use crate::group::FieldGroup;

/// Write the state of `result` into the group's parts: the error message,
/// the controls' state classes and the indicators' visibility.
pub fn render_group(
    form: &mut Element,
    group: &FieldGroup,
    result: &ValidationResult,
    config: &ValidatorConfig,
) {
    let valid = result.is_valid();

    if let Some(slot) = group.error_slot.resolve_mut(form) {
        slot.set_text(result.message().unwrap_or_default());
    }

    let (add, remove) = if valid {
        (&config.valid_class, &config.invalid_class)
    } else {
        (&config.invalid_class, &config.valid_class)
    };
    for path in &group.controls {
        if let Some(control) = path.resolve_mut(form) {
            control.add_class(add.as_str());
            control.remove_class(remove);
        }
    }

    set_hidden(form, group.success_icon.as_ref(), !valid, config);
    set_hidden(form, group.error_icon.as_ref(), valid, config);
}

fn set_hidden(form: &mut Element, path: Option<&ElementPath>, hidden: bool, config: &ValidatorConfig) {
    let Some(el) = path.and_then(|p| p.resolve_mut(form)) else {
        return;
    };
    if hidden {
        el.add_class(config.hidden_class.as_str());
    } else {
        el.remove_class(&config.hidden_class);
    }
}
