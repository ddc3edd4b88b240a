use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetKind {
    Collapse,
    ToggleInput,
    Sidebar,
}

/// A widget bound to its host element: the nodes it rendered into the host
/// and the listeners it registered. Listeners stay attached for as long as
/// the widget is kept in `MOUNTED_WIDGETS`.
pub(super) struct MountedWidget {
    kind: WidgetKind,
    host: Element,
    rendered: Vec<Element>,
    _listeners: Vec<Listener>,
}

impl MountedWidget {
    /// Returns the host to its unmounted state so a later pass can mount it
    /// again from its attributes.
    fn unmount(self) {
        for node in &self.rendered {
            node.remove();
        }
        if self.host.remove_attribute(MOUNTED_ATTRIBUTE).is_err() {
            debug!("failed to clear mounted marker");
        }
        debug!(kind = ?self.kind, "widget unmounted");
    }
}

pub(super) fn mount_all_widgets() -> Result<usize, ShellError> {
    let document = document()?;
    let detached: Vec<MountedWidget> = MOUNTED_WIDGETS.with(|widgets| {
        let mut widgets = widgets.borrow_mut();
        let (connected, detached): (Vec<_>, Vec<_>) = std::mem::take(&mut *widgets)
            .into_iter()
            .partition(|widget| widget.host.is_connected());
        *widgets = connected;
        detached
    });
    for widget in detached {
        widget.unmount();
    }

    // A host that fails to mount is skipped so the others still work.
    let mut mounted = Vec::new();
    for host in unmounted_hosts(&document, COLLAPSE_BUTTON_TAG) {
        match mount_collapse_button(&document, host) {
            Ok(widget) => mounted.push(widget),
            Err(error) => record_error(&error),
        }
    }
    for host in unmounted_hosts(&document, TOGGLE_INPUT_TAG) {
        match mount_toggle_input(&document, host) {
            Ok(widget) => mounted.push(widget),
            Err(error) => record_error(&error),
        }
    }
    let selected_class = console_config().selected_class;
    for host in unmounted_hosts(&document, SIDEBAR_TAG) {
        match mount_sidebar(&document, host, &selected_class) {
            Ok(widget) => mounted.push(widget),
            Err(error) => record_error(&error),
        }
    }

    let newly_mounted = mounted.len();
    MOUNTED_WIDGETS.with(|widgets| {
        let mut widgets = widgets.borrow_mut();
        widgets.extend(mounted);
        let count = |kind| widgets.iter().filter(|widget| widget.kind == kind).count();
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.mounted_collapse_buttons = count(WidgetKind::Collapse);
            state.mounted_toggle_inputs = count(WidgetKind::ToggleInput);
            state.mounted_sidebars = count(WidgetKind::Sidebar);
        });
    });
    Ok(newly_mounted)
}

fn mount_collapse_button(document: &Document, host: Element) -> Result<MountedWidget, ShellError> {
    let config = CollapseConfig::from_attributes(|name| host.get_attribute(name));
    let mut rendered: Vec<Element> = Vec::new();

    if let Some(label) = config.label.as_deref() {
        let label_element = create_html_element(document, "span")?;
        label_element.set_class_name(COLLAPSE_LABEL_CLASS);
        label_element.set_text_content(Some(label));
        append(&host, &label_element)?;
        rendered.push(label_element.into());
    }

    let button = create_html_element(document, "button")?;
    set_attribute(&button, "type", "button")?;
    button.set_class_name(COLLAPSE_TOGGLE_CLASS);
    button.set_text_content(Some(config.button_text.as_str()));
    append(&host, &button)?;
    rendered.push(button.clone().into());

    let region = match config.target_id.as_deref() {
        Some(target_id) => {
            let region = document
                .get_element_by_id(target_id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok());
            if region.is_none() {
                debug!(target_id, "collapse target not found; button will do nothing");
            }
            region
        }
        None => {
            let region = create_html_element(document, "div")?;
            region.set_class_name(COLLAPSE_REGION_CLASS);
            region.set_text_content(Some(config.collapse_text.as_str()));
            region.set_hidden(CollapseState::default().is_hidden());
            append(&host, &region)?;
            rendered.push(region.clone().into());
            Some(region)
        }
    };

    let click = EventClosure::wrap(Box::new(move |_event: web_sys::Event| {
        toggle_collapse(region.as_ref());
    }));
    let click = add_listener(&button, "click", click)?;
    set_attribute(&host, MOUNTED_ATTRIBUTE, COLLAPSE_BUTTON_TAG)?;

    Ok(MountedWidget {
        kind: WidgetKind::Collapse,
        host,
        rendered,
        _listeners: vec![click],
    })
}

/// Flips the region between shown and hidden. No region is a no-op.
pub(super) fn toggle_collapse(region: Option<&HtmlElement>) {
    let Some(region) = region else {
        return;
    };
    let next = CollapseState::from_hidden(region.hidden()).toggled();
    region.set_hidden(next.is_hidden());
}

fn mount_toggle_input(document: &Document, host: Element) -> Result<MountedWidget, ShellError> {
    let config = ToggleInputConfig::from_attributes(|name| host.get_attribute(name));

    let label = create_html_element(document, "label")?;
    let switch = create_input(document, "checkbox")?;
    switch.set_class_name(TOGGLE_SWITCH_CLASS);
    switch.set_checked(config.checked);
    append(&label, &switch)?;
    let text = document.create_text_node(&config.button_text);
    append(&label, &text)?;
    append(&host, &label)?;

    // The visible switch has no name; only the hidden field is submitted.
    let hidden = create_input(document, "hidden")?;
    hidden.set_class_name(TOGGLE_HIDDEN_CLASS);
    hidden.set_name(&config.input_name);
    hidden.set_value(config.initial_hidden_value());
    append(&host, &hidden)?;

    let rendered: Vec<Element> = vec![label.into(), hidden.clone().into()];
    let hidden = Some(hidden);
    let change = EventClosure::wrap(Box::new(move |event: web_sys::Event| {
        flip_hidden_input(&event, hidden.as_ref());
    }));
    let change = add_listener(&switch, "change", change)?;
    set_attribute(&host, MOUNTED_ATTRIBUTE, TOGGLE_INPUT_TAG)?;

    Ok(MountedWidget {
        kind: WidgetKind::ToggleInput,
        host,
        rendered,
        _listeners: vec![change],
    })
}

/// Mirrors the switch that fired `event` into the paired hidden field.
pub(super) fn flip_hidden_input(event: &web_sys::Event, hidden: Option<&HtmlInputElement>) {
    let Some(hidden) = hidden else {
        return;
    };
    let Some(switch) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    hidden.set_value(hidden_value(switch.checked()));
}

fn mount_sidebar(
    document: &Document,
    host: Element,
    selected_class: &str,
) -> Result<MountedWidget, ShellError> {
    let list = create_html_element(document, "div")?;
    list.set_class_name(SIDEBAR_LIST_CLASS);
    set_attribute(&list, "role", "listbox")?;

    let selected = current_page(&ADMIN_NAV_ENTRIES, &current_pathname());
    let mut listeners = Vec::with_capacity(ADMIN_NAV_ENTRIES.len());
    for (index, entry) in ADMIN_NAV_ENTRIES.iter().copied().enumerate() {
        let item = create_html_element(document, "div")?;
        item.set_id(entry.label);
        set_attribute(&item, "role", "option")?;
        set_attribute(&item, SIDEBAR_HREF_ATTRIBUTE, entry.path)?;
        if selected == Some(index) {
            item.set_class_name(&format!("{SIDEBAR_ITEM_CLASS} {selected_class}"));
            set_attribute(&item, "aria-selected", "true")?;
        } else {
            item.set_class_name(SIDEBAR_ITEM_CLASS);
        }
        item.set_text_content(Some(entry.label));

        let click = EventClosure::wrap(Box::new(move |event: web_sys::Event| {
            follow_nav_entry(entry.path, event.default_prevented());
        }));
        listeners.push(add_listener(&item, "click", click)?);
        append(&list, &item)?;
    }

    append(&host, &list)?;
    set_attribute(&host, MOUNTED_ATTRIBUTE, SIDEBAR_TAG)?;

    Ok(MountedWidget {
        kind: WidgetKind::Sidebar,
        host,
        rendered: vec![list.into()],
        _listeners: listeners,
    })
}

/// Records the clicked entry and navigates to it unless another handler
/// already cancelled the click.
pub(super) fn follow_nav_entry(path: &str, cancelled: bool) {
    DIAGNOSTICS.with(|state| state.borrow_mut().last_item_clicked = Some(path.to_string()));
    if cancelled {
        debug!(path, "sidebar click cancelled; staying on page");
        return;
    }
    if let Err(error) = navigate_to(path) {
        record_error(&error);
    }
}
