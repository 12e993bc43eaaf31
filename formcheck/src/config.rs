//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Attribute names that trigger each standard rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleAttributes {
    pub min_length: String,
    /// Native `maxlength` stops typing instead of reporting, hence a custom name.
    pub max_length: String,
    pub pattern: String,
    pub matches: String,
    pub required: String,
}

impl Default for RuleAttributes {
    fn default() -> Self {
        Self {
            min_length: "minlength".to_string(),
            max_length: "custommaxlength".to_string(),
            pattern: "pattern".to_string(),
            matches: "match".to_string(),
            required: "required".to_string(),
        }
    }
}

/// Per-form configuration: how field-groups are recognized in the document
/// and which classes express their state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Id of the form to attach to. The first `form` element when unset.
    pub form_id: Option<String>,

    /// Marker class shared by every field-group.
    pub group_class: String,
    /// Class of the element receiving the error message.
    pub error_class: String,
    pub error_icon_class: String,
    pub success_icon_class: String,

    /// Added to controls of a valid group.
    pub valid_class: String,
    /// Added to controls of an invalid group.
    pub invalid_class: String,
    /// Toggled on the status indicators.
    pub hidden_class: String,

    /// Tag naming a grouped control set (used instead of the member labels).
    pub legend_tag: String,

    pub attributes: RuleAttributes,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            form_id: None,
            group_class: "formGroup".to_string(),
            error_class: "error".to_string(),
            error_icon_class: "error-icon".to_string(),
            success_icon_class: "success-icon".to_string(),
            valid_class: "border-green-700".to_string(),
            invalid_class: "border-red-700".to_string(),
            hidden_class: "hidden".to_string(),
            legend_tag: "p".to_string(),
            attributes: RuleAttributes::default(),
        }
    }
}

impl ValidatorConfig {
    /// Config attaching to the form with the given id.
    pub fn for_form(id: impl Into<String>) -> Self {
        Self {
            form_id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn group_class(mut self, class: impl Into<String>) -> Self {
        self.group_class = class.into();
        self
    }

    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Set the classes of the error and success indicators.
    pub fn icon_classes(mut self, error: impl Into<String>, success: impl Into<String>) -> Self {
        self.error_icon_class = error.into();
        self.success_icon_class = success.into();
        self
    }

    /// Set the classes applied to controls of valid and invalid groups.
    pub fn state_classes(mut self, valid: impl Into<String>, invalid: impl Into<String>) -> Self {
        self.valid_class = valid.into();
        self.invalid_class = invalid.into();
        self
    }

    pub fn hidden_class(mut self, class: impl Into<String>) -> Self {
        self.hidden_class = class.into();
        self
    }

    pub fn legend_tag(mut self, tag: impl Into<String>) -> Self {
        self.legend_tag = tag.into();
        self
    }

    pub fn attributes(mut self, attributes: RuleAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}
