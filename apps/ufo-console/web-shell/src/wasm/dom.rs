use super::*;

pub(super) fn create_html_element(
    document: &Document,
    tag: &'static str,
) -> Result<HtmlElement, ShellError> {
    document
        .create_element(tag)
        .map_err(|_| ShellError::CreateElement(tag))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ShellError::CreateElement(tag))
}

pub(super) fn create_input(
    document: &Document,
    input_type: &str,
) -> Result<HtmlInputElement, ShellError> {
    let input = document
        .create_element("input")
        .map_err(|_| ShellError::CreateElement("input"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ShellError::CreateElement("input"))?;
    input.set_type(input_type);
    Ok(input)
}

pub(super) fn append(parent: &Element, child: &web_sys::Node) -> Result<(), ShellError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| ShellError::Dom("append child"))
}

pub(super) fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), ShellError> {
    element
        .set_attribute(name, value)
        .map_err(|_| ShellError::Dom("set attribute"))
}

/// A callback attached to an event target. Dropping it detaches the
/// callback before the closure is freed.
pub(super) struct Listener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: EventClosure,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

pub(super) fn add_listener(
    target: &web_sys::EventTarget,
    event_name: &'static str,
    callback: EventClosure,
) -> Result<Listener, ShellError> {
    target
        .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        .map_err(|_| ShellError::Listener(event_name))?;
    Ok(Listener {
        target: target.clone(),
        event_name,
        callback,
    })
}

/// Hosts the widget layer has not claimed yet, in document order.
pub(super) fn unmounted_hosts(document: &Document, tag: &str) -> Vec<Element> {
    let collection = document.get_elements_by_tag_name(tag);
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .filter(|host| !host.has_attribute(MOUNTED_ATTRIBUTE))
        .collect()
}

/// `value` property of a form control. Custom input elements expose the
/// same property, so this does not require a native `<input>`.
pub(super) fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    js_sys::Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
}
