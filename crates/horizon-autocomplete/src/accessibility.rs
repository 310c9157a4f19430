//! Accessibility attributes for the combobox, its panel and its rows.
//!
//! The contract is deliberately small: the input is a list-autocompleting
//! combobox, the panel is a labelled dialog holding a listbox, and each row is
//! an option whose `aria-selected` is `is_active && is_selected`.

#[cfg(feature = "accessibility")]
use accesskit::Role;

use crate::option::Value;

/// The accessibility role of an autocomplete element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibleRole {
    /// The text input.
    ComboBox,
    /// The floating panel.
    Dialog,
    /// The option list inside the panel.
    ListBox,
    /// A single row.
    Option,
}

impl AccessibleRole {
    /// The ARIA `role` attribute value.
    pub fn as_aria(self) -> &'static str {
        match self {
            AccessibleRole::ComboBox => "combobox",
            AccessibleRole::Dialog => "dialog",
            AccessibleRole::ListBox => "listbox",
            AccessibleRole::Option => "option",
        }
    }

    /// Convert to an AccessKit role.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::ComboBox => Role::ComboBox,
            AccessibleRole::Dialog => Role::Dialog,
            AccessibleRole::ListBox => Role::ListBox,
            AccessibleRole::Option => Role::ListBoxOption,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleRole> for Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}

/// Element id for an option row: the string form of its value.
pub fn option_id(value: &Value) -> String {
    value.to_string()
}

/// Attributes for the text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxAttributes {
    pub role: AccessibleRole,
    /// Always `"list"`.
    pub aria_autocomplete: &'static str,
    pub aria_disabled: bool,
    /// Always `"off"`, so the browser's own suggestions stay out of the way.
    pub autocomplete: &'static str,
    pub aria_labelledby: Option<String>,
    pub aria_expanded: bool,
    /// Id of the active row while the panel is open.
    pub aria_activedescendant: Option<String>,
}

impl ComboboxAttributes {
    pub fn new(disabled: bool, labelledby: Option<&str>) -> Self {
        Self {
            role: AccessibleRole::ComboBox,
            aria_autocomplete: "list",
            aria_disabled: disabled,
            autocomplete: "off",
            aria_labelledby: labelledby.map(str::to_owned),
            aria_expanded: false,
            aria_activedescendant: None,
        }
    }

    /// Name/value pairs in DOM attribute form.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("role", self.role.as_aria().to_owned()),
            ("aria-autocomplete", self.aria_autocomplete.to_owned()),
            ("aria-disabled", self.aria_disabled.to_string()),
            ("autocomplete", self.autocomplete.to_owned()),
            ("aria-expanded", self.aria_expanded.to_string()),
        ];
        if let Some(label) = &self.aria_labelledby {
            pairs.push(("aria-labelledby", label.clone()));
        }
        if let Some(active) = &self.aria_activedescendant {
            pairs.push(("aria-activedescendant", active.clone()));
        }
        pairs
    }
}

/// Attributes for the floating panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAttributes {
    pub role: AccessibleRole,
    pub aria_labelledby: Option<String>,
    /// Role of the list container inside the panel.
    pub list_role: AccessibleRole,
}

impl PanelAttributes {
    pub fn new(labelledby: Option<&str>) -> Self {
        Self {
            role: AccessibleRole::Dialog,
            aria_labelledby: labelledby.map(str::to_owned),
            list_role: AccessibleRole::ListBox,
        }
    }
}

/// Attributes for one option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAttributes {
    pub role: AccessibleRole,
    pub id: String,
    /// Set only when the row is both active and selected.
    pub aria_selected: bool,
    pub aria_disabled: bool,
}

impl OptionAttributes {
    pub fn new(value: &Value, is_active: bool, is_selected: bool, disabled: bool) -> Self {
        Self {
            role: AccessibleRole::Option,
            id: option_id(value),
            aria_selected: is_active && is_selected,
            aria_disabled: disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combobox_pairs() {
        let mut attrs = ComboboxAttributes::new(false, Some("unit-label"));
        attrs.aria_expanded = true;
        let pairs = attrs.to_pairs();

        assert!(pairs.contains(&("aria-autocomplete", "list".to_owned())));
        assert!(pairs.contains(&("autocomplete", "off".to_owned())));
        assert!(pairs.contains(&("aria-labelledby", "unit-label".to_owned())));
        assert!(pairs.contains(&("aria-expanded", "true".to_owned())));
        assert!(!pairs.iter().any(|(name, _)| *name == "aria-activedescendant"));
    }

    #[test]
    fn test_option_selected_requires_active() {
        let value = Value::from("kg");
        assert!(!OptionAttributes::new(&value, false, true, false).aria_selected);
        assert!(!OptionAttributes::new(&value, true, false, false).aria_selected);
        assert!(OptionAttributes::new(&value, true, true, false).aria_selected);
        assert_eq!(OptionAttributes::new(&Value::from(12), true, true, false).id, "12");
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accesskit_roles() {
        assert_eq!(Role::from(AccessibleRole::ComboBox), Role::ComboBox);
        assert_eq!(AccessibleRole::Option.to_accesskit_role(), Role::ListBoxOption);
    }
}
