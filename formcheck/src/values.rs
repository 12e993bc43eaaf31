//! Field values surfaced by a validated form.

use std::collections::BTreeMap;

use formdom::{Element, find_all};
use serde::Serialize;

/// Flat mapping from field identifier to value.
///
/// The identifier is a control's `name` attribute, or its id when it has no
/// name. Radios and checkboxes contribute only when checked, so a radio set
/// sharing one name yields the value of its selected member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the values of every control in `form`.
    pub fn collect(form: &Element) -> Self {
        let mut values = Self::new();
        for control in find_all(form, |el| el.is_control()) {
            let Some(key) = control.attr_value("name").or(control.id_str()) else {
                continue;
            };
            if control.is_checkable() {
                if !control.checked {
                    continue;
                }
                // Browsers submit "on" for a checked control without a value
                let value = if control.value.is_empty() {
                    "on"
                } else {
                    control.value.as_str()
                };
                values.insert(key, value);
            } else {
                values.insert(key, control.value.as_str());
            }
        }
        values
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
