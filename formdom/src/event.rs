use serde::{Deserialize, Serialize};

/// Events dispatched into a form by the surrounding UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// The text of a control changed
    Input { target: String, value: String },
    /// A radio or checkbox was (un)checked
    Toggle { target: String, checked: bool },
    /// Element lost focus
    Blur { target: String },
    /// The form was submitted
    Submit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
}

impl Event {
    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn toggle(target: impl Into<String>, checked: bool) -> Self {
        Self::Toggle {
            target: target.into(),
            checked,
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn submit() -> Self {
        Self::Submit { target: None }
    }

    /// The id of the element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Input { target, .. } | Self::Toggle { target, .. } | Self::Blur { target } => {
                Some(target)
            }
            Self::Submit { target } => target.as_deref(),
        }
    }
}
