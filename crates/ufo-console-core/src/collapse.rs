use crate::attribute_with_alias;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseConfig {
    pub button_text: String,
    pub collapse_text: String,
    pub label: Option<String>,
    /// Id of an external region to toggle instead of the rendered one.
    pub target_id: Option<String>,
}

impl CollapseConfig {
    pub fn from_attributes<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            button_text: attribute_with_alias(&mut get, "button-text", "buttonText")
                .unwrap_or_default(),
            collapse_text: attribute_with_alias(&mut get, "collapse-text", "collapseText")
                .unwrap_or_default(),
            label: get("label").filter(|label| !label.trim().is_empty()),
            target_id: get("for")
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        }
    }
}

/// Visibility of a collapsible region. Regions start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapseState {
    opened: bool,
}

impl CollapseState {
    pub fn from_hidden(hidden: bool) -> Self {
        Self { opened: !hidden }
    }

    pub fn is_hidden(self) -> bool {
        !self.opened
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self {
            opened: !self.opened,
        }
    }
}
