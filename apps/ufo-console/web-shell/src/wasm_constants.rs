pub(crate) const CONFIG_GLOBAL_NAME: &str = "__UFO_CONSOLE_CONFIG__";
pub(crate) const MOUNTED_ATTRIBUTE: &str = "data-ufo-mounted";
pub(crate) const COLLAPSE_BUTTON_TAG: &str = "ufo-collapse-button";
pub(crate) const TOGGLE_INPUT_TAG: &str = "ufo-toggle-input";
pub(crate) const SIDEBAR_TAG: &str = "ufo-sidebar";
pub(crate) const COLLAPSE_LABEL_CLASS: &str = "ufo-collapse-label";
pub(crate) const COLLAPSE_TOGGLE_CLASS: &str = "ufo-collapse-toggle";
pub(crate) const COLLAPSE_REGION_CLASS: &str = "collapse";
pub(crate) const TOGGLE_SWITCH_CLASS: &str = "ufo-toggle-switch";
pub(crate) const TOGGLE_HIDDEN_CLASS: &str = "ufo-toggle-hidden";
pub(crate) const SIDEBAR_LIST_CLASS: &str = "ufo-sidebar-list";
pub(crate) const SIDEBAR_ITEM_CLASS: &str = "ufo-sidebar-item";
pub(crate) const SIDEBAR_HREF_ATTRIBUTE: &str = "data-href";
pub(crate) const CLIPBOARD_TEXT_FORMAT: &str = "text/plain";
