//! Field-group records.
//!
//! A field-group is the unit of validation: a label, one or more controls,
//! an error slot and two status indicators. Groups are located once when the
//! validator attaches; afterwards every part is addressed through the
//! recorded paths (relative to the form element) instead of walking the
//! tree again.

use formdom::{Element, ElementPath};

use crate::config::ValidatorConfig;
use crate::error::{FormError, GroupPart};

/// Explicit record of one field-group's parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    /// Position of this group in document order.
    pub index: usize,
    /// Path of the group element itself.
    pub path: ElementPath,
    /// Text of the group's `label`.
    pub label: String,
    /// Text naming an exclusive-choice control set. Only recorded for groups
    /// holding exclusive-choice controls.
    pub legend: Option<String>,
    /// Controls in document order. The first one is the primary control.
    pub controls: Vec<ElementPath>,
    /// Ids of the controls that have one, in document order.
    pub control_ids: Vec<String>,
    pub error_slot: ElementPath,
    pub error_icon: Option<ElementPath>,
    pub success_icon: Option<ElementPath>,
}

impl FieldGroup {
    /// Locate every field-group under `form` and build its record.
    pub fn collect(form: &Element, config: &ValidatorConfig) -> Result<Vec<FieldGroup>, FormError> {
        ElementPath::find_all(form, |el| el.has_class(&config.group_class))
            .into_iter()
            .enumerate()
            .map(|(index, path)| Self::build(form, index, path, config))
            .collect()
    }

    fn build(
        form: &Element,
        index: usize,
        path: ElementPath,
        config: &ValidatorConfig,
    ) -> Result<Self, FormError> {
        let Some(group) = path.resolve(form) else {
            return Err(FormError::missing_part(index, &path, GroupPart::Control));
        };

        let within = |predicate: &dyn Fn(&Element) -> bool| -> Vec<ElementPath> {
            ElementPath::find_all(group, predicate)
                .into_iter()
                .filter(|rel| rel.depth() > 0)
                .map(|rel| path.append(&rel))
                .collect()
        };
        let first_within = |predicate: &dyn Fn(&Element) -> bool| within(predicate).into_iter().next();

        let controls = within(&|el: &Element| el.is_control());
        if controls.is_empty() {
            return Err(FormError::missing_part(index, &path, GroupPart::Control));
        }

        let control_ids = controls
            .iter()
            .filter_map(|p| p.resolve(form).and_then(|el| el.id.clone()))
            .collect();

        let error_slot = first_within(&|el: &Element| el.has_class(&config.error_class))
            .ok_or_else(|| FormError::missing_part(index, &path, GroupPart::ErrorSlot))?;

        let text_of = |p: Option<ElementPath>| {
            p.and_then(|p| p.resolve(form).map(|el| el.text.trim().to_string()))
        };
        let is_choice_set = controls
            .iter()
            .any(|p| p.resolve(form).is_some_and(Element::is_exclusive_choice));
        let legend = if is_choice_set {
            text_of(first_within(&|el: &Element| {
                el.is(&config.legend_tag)
                    && !el.has_class(&config.error_class)
                    && !el.text.trim().is_empty()
            }))
        } else {
            None
        };
        let label = text_of(first_within(&|el: &Element| el.is("label")))
            .or_else(|| legend.clone())
            .ok_or_else(|| FormError::missing_part(index, &path, GroupPart::Label))?;

        let error_icon = first_within(&|el: &Element| el.has_class(&config.error_icon_class));
        let success_icon = first_within(&|el: &Element| el.has_class(&config.success_icon_class));

        Ok(Self {
            index,
            path,
            label,
            legend,
            controls,
            control_ids,
            error_slot,
            error_icon,
            success_icon,
        })
    }

    /// Path of the primary control.
    pub fn primary(&self) -> Option<&ElementPath> {
        self.controls.first()
    }

    /// The text naming this group in messages about group-level rules.
    pub fn legend_or_label(&self) -> &str {
        self.legend.as_deref().unwrap_or(&self.label)
    }

    /// Whether the control with `id` belongs to this group.
    pub fn contains(&self, id: &str) -> bool {
        self.control_ids.iter().any(|c| c == id)
    }
}
