use super::*;

pub(super) fn document() -> Result<Document, ShellError> {
    let window = web_sys::window().ok_or(ShellError::NoWindow)?;
    window.document().ok_or(ShellError::NoDocument)
}

pub(super) fn document_body() -> Result<HtmlElement, ShellError> {
    document()?.body().ok_or(ShellError::NoBody)
}

pub(super) fn current_pathname() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let Ok(pathname) = window.location().pathname() else {
        return "/".to_string();
    };
    if pathname.trim().is_empty() {
        "/".to_string()
    } else {
        pathname
    }
}

/// Full page load; the backend owns routing for every admin page.
pub(super) fn navigate_to(path: &str) -> Result<(), ShellError> {
    let window = web_sys::window().ok_or(ShellError::NoWindow)?;
    debug!(path, "navigating");
    window
        .location()
        .set_href(path)
        .map_err(|_| ShellError::Navigation(path.to_string()))
}

/// Reads `window.__UFO_CONSOLE_CONFIG__`, which may be a plain object or a
/// JSON string. Invalid config falls back to defaults.
pub(super) fn load_console_config() -> (ConsoleConfig, &'static str) {
    let Some(window) = web_sys::window() else {
        return (ConsoleConfig::default(), "default");
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL_NAME))
    else {
        return (ConsoleConfig::default(), "default");
    };
    if value.is_undefined() || value.is_null() {
        return (ConsoleConfig::default(), "default");
    }

    let raw = match value.as_string() {
        Some(raw) => raw,
        None => match js_sys::JSON::stringify(&value).ok().and_then(|raw| raw.as_string()) {
            Some(raw) => raw,
            None => {
                warn!("console config global is not serializable; using defaults");
                return (ConsoleConfig::default(), "default");
            }
        },
    };

    match ConsoleConfig::from_json(&raw) {
        Ok(config) => (config, "page"),
        Err(error) => {
            warn!(%error, "invalid console config; using defaults");
            (ConsoleConfig::default(), "default")
        }
    }
}

pub(super) fn init_logging(config: &ConsoleConfig) {
    let level = match config.level() {
        tracing::Level::TRACE => log::Level::Trace,
        tracing::Level::DEBUG => log::Level::Debug,
        tracing::Level::INFO => log::Level::Info,
        tracing::Level::WARN => log::Level::Warn,
        _ => log::Level::Error,
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}

pub(super) fn console_config() -> ConsoleConfig {
    CONFIG.with(|config| config.borrow().clone())
}

/// Runs `ready` now if the document has parsed, otherwise once on
/// `DOMContentLoaded`.
pub(super) fn run_when_dom_ready(ready: fn()) -> Result<(), ShellError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        ready();
        return Ok(());
    }

    DOM_READY_HANDLER.with(|slot| {
        slot.borrow_mut()
            .install_with(|| {
                let callback = EventClosure::wrap(Box::new(move |_event: web_sys::Event| ready()));
                document
                    .add_event_listener_with_callback(
                        "DOMContentLoaded",
                        callback.as_ref().unchecked_ref(),
                    )
                    .map_err(|_| ShellError::Listener("DOMContentLoaded"))?;
                Ok(callback)
            })
            .map(|_| ())
    })
}
