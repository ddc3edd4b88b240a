//! Page-level configuration for the console widgets.
//!
//! A host page may define `window.__UFO_CONSOLE_CONFIG__` to rename the
//! elements the helpers look up. Every field has a default matching the
//! stock templates, so an empty object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_HIDDEN_COPY_INPUT_ID: &str = "hiddenCopyInput";
pub const DEFAULT_MANUAL_FORM_ID: &str = "manualAdd";
pub const DEFAULT_MANUAL_NAME_INPUT_ID: &str = "manualUserName";
pub const DEFAULT_MANUAL_EMAIL_INPUT_ID: &str = "manualUserEmail";
pub const DEFAULT_USERS_FIELD_NAME: &str = "users";
pub const DEFAULT_MANUAL_FLAG_FIELD_NAME: &str = "manual";
pub const DEFAULT_SELECTED_CLASS: &str = "iron-selected";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub hidden_copy_input_id: String,
    pub manual_form_id: String,
    pub manual_name_input_id: String,
    pub manual_email_input_id: String,
    pub users_field_name: String,
    pub manual_flag_field_name: String,
    pub selected_class: String,
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            hidden_copy_input_id: DEFAULT_HIDDEN_COPY_INPUT_ID.to_string(),
            manual_form_id: DEFAULT_MANUAL_FORM_ID.to_string(),
            manual_name_input_id: DEFAULT_MANUAL_NAME_INPUT_ID.to_string(),
            manual_email_input_id: DEFAULT_MANUAL_EMAIL_INPUT_ID.to_string(),
            users_field_name: DEFAULT_USERS_FIELD_NAME.to_string(),
            manual_flag_field_name: DEFAULT_MANUAL_FLAG_FIELD_NAME.to_string(),
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("hiddenCopyInputId", self.hidden_copy_input_id.as_str()),
            ("manualFormId", self.manual_form_id.as_str()),
            ("manualNameInputId", self.manual_name_input_id.as_str()),
            ("manualEmailInputId", self.manual_email_input_id.as_str()),
            ("usersFieldName", self.users_field_name.as_str()),
            ("manualFlagFieldName", self.manual_flag_field_name.as_str()),
            ("selectedClass", self.selected_class.as_str()),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }

    /// Parsed log level; unknown names fall back to `info`.
    pub fn level(&self) -> tracing::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" | "warning" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ConsoleConfig::from_json("{}");
        assert_eq!(config.ok(), Some(ConsoleConfig::default()));
    }

    #[test]
    fn defaults_match_stock_templates() {
        let config = ConsoleConfig::default();
        assert_eq!(config.hidden_copy_input_id, "hiddenCopyInput");
        assert_eq!(config.manual_form_id, "manualAdd");
        assert_eq!(config.manual_name_input_id, "manualUserName");
        assert_eq!(config.manual_email_input_id, "manualUserEmail");
        assert_eq!(config.users_field_name, "users");
        assert_eq!(config.manual_flag_field_name, "manual");
        assert_eq!(config.selected_class, "iron-selected");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = ConsoleConfig::from_json(r#"{"hiddenCopyInputId":"inviteCode","logLevel":"debug"}"#)
            .unwrap_or_default();
        assert_eq!(config.hidden_copy_input_id, "inviteCode");
        assert_eq!(config.manual_form_id, "manualAdd");
        assert_eq!(config.level(), tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            ConsoleConfig::from_json(r#"{"hiddenCopyInput":"typo"}"#),
            Err(ConfigError::InvalidJson(_))
        ));
        assert!(matches!(
            ConsoleConfig::from_json("not json"),
            Err(ConfigError::InvalidJson(_))
        ));
    }

    #[test]
    fn rejects_blank_ids() {
        let result = ConsoleConfig::from_json(r#"{"manualFormId":"  "}"#);
        assert!(matches!(
            result,
            Err(ConfigError::EmptyField {
                field: "manualFormId"
            })
        ));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = ConsoleConfig {
            log_level: "chatty".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.level(), tracing::Level::INFO);
    }
}
