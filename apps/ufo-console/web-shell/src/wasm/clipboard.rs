use super::*;

// Clipboard data is only writable from a trusted copy handler, so this
// listener sits on the body directly instead of behind a widget.
pub(super) fn install_clipboard_bridge_once() -> Result<bool, ShellError> {
    let body = document_body()?;
    let installed = CLIPBOARD_COPY_HANDLER.with(|slot| {
        slot.borrow_mut().install_with(|| -> Result<EventClosure, ShellError> {
            let callback = EventClosure::wrap(Box::new(move |event: web_sys::Event| {
                copy_invite_code_to_clipboard(&event);
            }));
            body.add_event_listener_with_callback_and_bool(
                "copy",
                callback.as_ref().unchecked_ref(),
                true,
            )
            .map_err(|_| ShellError::Listener("copy"))?;
            Ok(callback)
        })
    })?;

    if installed {
        info!("clipboard bridge installed");
        DIAGNOSTICS.with(|state| state.borrow_mut().clipboard_bridge_installed = true);
    } else {
        debug!("clipboard bridge already installed");
    }
    Ok(installed)
}

pub(super) fn copy_invite_code_to_clipboard(event: &web_sys::Event) {
    let Ok(document) = document() else {
        return;
    };
    let target = copy_target(event, &document);
    let source_id = console_config().hidden_copy_input_id;
    let decision = decide_copy(target, || {
        document
            .get_element_by_id(&source_id)
            .and_then(|element| control_value(&element))
    });

    match decision {
        CopyDecision::PassThrough => {}
        CopyDecision::MissingSource => {
            warn!(%source_id, "copy on body but the invite code field is missing");
        }
        CopyDecision::Override(code) => {
            let Some(data) = event
                .dyn_ref::<ClipboardEvent>()
                .and_then(ClipboardEvent::clipboard_data)
            else {
                warn!("copy event carries no clipboard data");
                return;
            };
            event.prevent_default();
            if data.set_data(CLIPBOARD_TEXT_FORMAT, &code).is_err() {
                warn!("failed to write invite code to clipboard");
                return;
            }
            debug!("invite code copied");
        }
    }
}

fn copy_target(event: &web_sys::Event, document: &Document) -> CopyTarget {
    match (event.target(), document.body()) {
        (Some(target), Some(body)) if js_sys::Object::is(&target, &body) => {
            CopyTarget::DocumentBody
        }
        _ => CopyTarget::Other,
    }
}
