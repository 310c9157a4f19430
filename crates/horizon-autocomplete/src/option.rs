//! Option and candidate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value carried by an option: either free text or a number.
///
/// Equality is strict, so `Text("5")` never equals `Number(5)`. The
/// [`Display`](fmt::Display) form is what gets matched against labels and
/// what becomes the option's element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Text(String),
}

impl Value {
    /// Borrow the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// One selectable entry supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    /// Create an option whose label doubles as its text value.
    pub fn text(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Value::Text(label.clone()),
            label,
            disabled: false,
        }
    }

    /// Mark the option as disabled (builder pattern).
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the disabled flag (builder pattern).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An option annotated with its position in the host's full option set.
///
/// `index` is the stable identity of the option; it never refers to the
/// filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub index: usize,
    pub option: &'a SelectOption,
}

impl<'a> Candidate<'a> {
    /// The option's label.
    #[inline]
    pub fn label(&self) -> &'a str {
        &self.option.label
    }

    /// The option's value.
    #[inline]
    pub fn value(&self) -> &'a Value {
        &self.option.value
    }

    /// Whether the option can become active or be committed.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.option.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_strict_equality() {
        assert_ne!(Value::from("5"), Value::from(5));
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from("kg").as_text(), Some("kg"));
    }

    #[test]
    fn test_option_builder() {
        let option = SelectOption::new("Kilogram", "kg").disabled();
        assert!(option.disabled);
        assert_eq!(option.value, Value::Text("kg".into()));

        let option = SelectOption::text("pcs");
        assert_eq!(option.label, "pcs");
        assert_eq!(option.value, Value::Text("pcs".into()));
    }

    #[test]
    fn test_option_deserialize() {
        let option: SelectOption = toml::from_str(
            r#"
            label = "Dozen"
            value = 12
            "#,
        )
        .unwrap();
        assert_eq!(option.value, Value::Number(12));
        assert!(!option.disabled);
    }
}
