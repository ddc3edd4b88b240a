use serde::Serialize;

use crate::error::PayloadError;

/// A user typed into the "Add Manually" tab.
///
/// Field order is the wire order: `name` then `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualUser {
    pub name: String,
    pub email: String,
}

impl ManualUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Trims both fields and rejects blanks before anything is submitted.
    pub fn from_form_values(name: &str, email: &str) -> Result<Self, PayloadError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PayloadError::EmptyName);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(PayloadError::EmptyEmail);
        }
        Ok(Self::new(name, email))
    }
}

/// Encodes the `users` form field: a JSON list of `{name, email}` objects.
pub fn encode_manual_users(users: &[ManualUser]) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(users)?)
}
