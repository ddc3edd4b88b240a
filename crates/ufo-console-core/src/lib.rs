//! Browser-independent pieces of the UfO admin console front end.
//!
//! Everything here is plain Rust so it can be unit-tested on the host. The
//! web shell binds these types to DOM nodes and browser events.

pub mod clipboard;
pub mod collapse;
pub mod config;
pub mod error;
pub mod handler_slot;
pub mod manual_user;
pub mod nav;
pub mod toggle_input;

pub use clipboard::{CopyDecision, CopyTarget, decide_copy};
pub use collapse::{CollapseConfig, CollapseState};
pub use config::ConsoleConfig;
pub use error::{ConfigError, PayloadError};
pub use handler_slot::HandlerSlot;
pub use manual_user::{ManualUser, encode_manual_users};
pub use nav::{ADMIN_NAV_ENTRIES, NavEntry, current_page};
pub use toggle_input::{ToggleInputConfig, hidden_value, parse_bool_attribute};

/// Reads a widget attribute by its kebab-case name, falling back to the
/// camelCase spelling older templates used.
pub fn attribute_with_alias<F>(mut get: F, kebab: &str, camel: &str) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    get(kebab).or_else(|| get(camel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn attribute_lookup_prefers_kebab_case() {
        let attrs = HashMap::from([
            ("button-text".to_string(), "kebab".to_string()),
            ("buttonText".to_string(), "camel".to_string()),
        ]);
        let value = attribute_with_alias(|name| attrs.get(name).cloned(), "button-text", "buttonText");
        assert_eq!(value.as_deref(), Some("kebab"));
    }

    #[test]
    fn attribute_lookup_falls_back_to_camel_case() {
        let attrs = HashMap::from([("collapseText".to_string(), "camel".to_string())]);
        let value =
            attribute_with_alias(|name| attrs.get(name).cloned(), "collapse-text", "collapseText");
        assert_eq!(value.as_deref(), Some("camel"));
        assert!(attribute_with_alias(|name| attrs.get(name).cloned(), "label", "label").is_none());
    }
}
