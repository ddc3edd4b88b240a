use crate::attribute_with_alias;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleInputConfig {
    /// Name of the hidden field submitted with the enclosing form.
    pub input_name: String,
    pub button_text: String,
    pub checked: bool,
}

impl ToggleInputConfig {
    pub fn from_attributes<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            input_name: attribute_with_alias(&mut get, "input-name", "inputName")
                .unwrap_or_default(),
            button_text: attribute_with_alias(&mut get, "button-text", "buttonText")
                .unwrap_or_default(),
            checked: parse_bool_attribute(get("checked").as_deref()),
        }
    }

    /// Value the hidden field should carry before any change event fires.
    pub fn initial_hidden_value(&self) -> &'static str {
        hidden_value(self.checked)
    }
}

/// Serialized form of a checked state, as the backend expects it.
pub fn hidden_value(checked: bool) -> &'static str {
    if checked { "true" } else { "false" }
}

/// Boolean attribute semantics: absent is false, present is true unless the
/// value spells out `false`.
pub fn parse_bool_attribute(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(value) => !value.trim().eq_ignore_ascii_case("false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hidden_value_matches_checked_state() {
        for checked in [true, false] {
            assert_eq!(hidden_value(checked), checked.to_string());
        }
    }

    #[test]
    fn boolean_attribute_parsing() {
        assert!(!parse_bool_attribute(None));
        assert!(parse_bool_attribute(Some("")));
        assert!(parse_bool_attribute(Some("checked")));
        assert!(parse_bool_attribute(Some("true")));
        assert!(!parse_bool_attribute(Some("false")));
        assert!(!parse_bool_attribute(Some(" FALSE ")));
    }

    #[test]
    fn checked_defaults_to_false() {
        let attrs = HashMap::from([("inputName", "enforce_proxy"), ("button-text", "Enforce")]);
        let config =
            ToggleInputConfig::from_attributes(|name| attrs.get(name).map(|v| v.to_string()));
        assert_eq!(config.input_name, "enforce_proxy");
        assert_eq!(config.button_text, "Enforce");
        assert!(!config.checked);
        assert_eq!(config.initial_hidden_value(), "false");
    }

    #[test]
    fn checked_attribute_sets_initial_value() {
        let attrs = HashMap::from([("input-name", "dns"), ("checked", "")]);
        let config =
            ToggleInputConfig::from_attributes(|name| attrs.get(name).map(|v| v.to_string()));
        assert!(config.checked);
        assert_eq!(config.initial_hidden_value(), "true");
    }
}
