#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use serde::Serialize;
    use tracing::{debug, info, warn};
    use ufo_console_core::{
        ADMIN_NAV_ENTRIES, CollapseConfig, CollapseState, ConsoleConfig, CopyDecision,
        CopyTarget, HandlerSlot, ManualUser, PayloadError, ToggleInputConfig, current_page,
        decide_copy, encode_manual_users, hidden_value,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        ClipboardEvent, Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement,
    };

    use crate::wasm_constants::*;

    mod clipboard;
    mod dom;
    mod forms;
    mod lifecycle;
    mod widgets;

    use clipboard::*;
    use dom::*;
    use forms::*;
    use lifecycle::*;
    use widgets::*;

    type EventClosure = Closure<dyn FnMut(web_sys::Event)>;

    thread_local! {
        static CONFIG: RefCell<ConsoleConfig> = RefCell::new(ConsoleConfig::default());
        static DIAGNOSTICS: RefCell<ConsoleDiagnostics> = RefCell::new(ConsoleDiagnostics::default());
        static CLIPBOARD_COPY_HANDLER: RefCell<HandlerSlot<EventClosure>> = const { RefCell::new(HandlerSlot::new()) };
        static DOM_READY_HANDLER: RefCell<HandlerSlot<EventClosure>> = const { RefCell::new(HandlerSlot::new()) };
        static MOUNTED_WIDGETS: RefCell<Vec<MountedWidget>> = const { RefCell::new(Vec::new()) };
    }

    #[derive(Debug, Clone, Default, Serialize)]
    struct ConsoleDiagnostics {
        phase: String,
        config_source: String,
        clipboard_bridge_installed: bool,
        mounted_collapse_buttons: usize,
        mounted_toggle_inputs: usize,
        mounted_sidebars: usize,
        last_item_clicked: Option<String>,
        last_error: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    pub(super) enum ShellError {
        #[error("window is unavailable")]
        NoWindow,
        #[error("document is unavailable")]
        NoDocument,
        #[error("document body is unavailable")]
        NoBody,
        #[error("form `{0}` was not found")]
        FormNotFound(String),
        #[error("field `{0}` was not found")]
        FieldNotFound(String),
        #[error("failed to create <{0}> element")]
        CreateElement(&'static str),
        #[error("failed to attach `{0}` listener")]
        Listener(&'static str),
        #[error("failed to update element: {0}")]
        Dom(&'static str),
        #[error("failed to submit form `{0}`")]
        Submit(String),
        #[error("failed to navigate to `{0}`")]
        Navigation(String),
        #[error(transparent)]
        Payload(#[from] PayloadError),
    }

    impl From<ShellError> for JsValue {
        fn from(error: ShellError) -> Self {
            record_error(&error);
            js_sys::Error::new(&error.to_string()).into()
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let (config, source) = load_console_config();
        init_logging(&config);
        CONFIG.with(|slot| *slot.borrow_mut() = config);
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.phase = "booting".to_string();
            state.config_source = source.to_string();
        });

        if let Err(error) = run_when_dom_ready(boot) {
            record_error(&error);
        }
    }

    fn boot() {
        if let Err(error) = install_clipboard_bridge_once() {
            record_error(&error);
        }
        match mount_all_widgets() {
            Ok(mounted) => info!(mounted, "console widgets mounted"),
            Err(error) => record_error(&error),
        }
        DIAGNOSTICS.with(|state| state.borrow_mut().phase = "ready".to_string());
    }

    /// Mounts any widget hosts added since the last pass and unmounts widgets
    /// whose host left the document, so a re-attached host is mounted again.
    /// Returns how many were newly mounted.
    #[wasm_bindgen(js_name = mountWidgets)]
    pub fn mount_widgets() -> Result<u32, JsValue> {
        let mounted = mount_all_widgets()?;
        Ok(u32::try_from(mounted).unwrap_or(u32::MAX))
    }

    /// Returns `true` when this call registered the copy interceptor and
    /// `false` when it was already present.
    #[wasm_bindgen(js_name = installClipboardBridge)]
    pub fn install_clipboard_bridge() -> Result<bool, JsValue> {
        Ok(install_clipboard_bridge_once()?)
    }

    #[wasm_bindgen(js_name = submitByFormId)]
    pub fn submit_by_form_id(id: String) -> Result<(), JsValue> {
        Ok(submit_form_by_id(&id)?)
    }

    #[wasm_bindgen(js_name = submitUsersManually)]
    pub fn submit_users_manually() -> Result<(), JsValue> {
        Ok(submit_manual_user_form()?)
    }

    #[wasm_bindgen(js_name = itemClicked)]
    pub fn item_clicked(path: String) -> Result<(), JsValue> {
        DIAGNOSTICS.with(|state| state.borrow_mut().last_item_clicked = Some(path.clone()));
        Ok(navigate_to(&path)?)
    }

    /// Index of the sidebar entry for the current page, or `undefined`.
    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page_index() -> Option<u32> {
        current_page(&ADMIN_NAV_ENTRIES, &current_pathname())
            .and_then(|index| u32::try_from(index).ok())
    }

    #[wasm_bindgen(js_name = consoleDiagnosticsJson)]
    pub fn console_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"last_error\":\"diagnostics serialization failed\"}"
                    .to_string()
            })
        })
    }

    fn record_error(error: &ShellError) {
        warn!(%error, "console shell error");
        DIAGNOSTICS.with(|state| state.borrow_mut().last_error = Some(error.to_string()));
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    console_diagnostics_json, current_page_index, install_clipboard_bridge, item_clicked,
    mount_widgets, submit_by_form_id, submit_users_manually,
};

#[cfg(not(target_arch = "wasm32"))]
pub fn console_diagnostics_json() -> String {
    "{\"phase\":\"native\",\"last_error\":\"console widgets only run on wasm\"}".to_string()
}
