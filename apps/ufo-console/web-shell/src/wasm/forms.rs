use super::*;

pub(super) fn submit_form_by_id(id: &str) -> Result<(), ShellError> {
    let form = form_by_id(&document()?, id)?;
    submit(&form, id)
}

/// Quick-add path for a single user typed into the manual tab.
pub(super) fn submit_manual_user_form() -> Result<(), ShellError> {
    let config = console_config();
    let document = document()?;
    let form = fill_manual_user_form(&document, &config)?;
    submit(&form, &config.manual_form_id)
}

/// Writes the `users` payload (and the `manual` flag when the form has
/// one) without submitting.
pub(super) fn fill_manual_user_form(
    document: &Document,
    config: &ConsoleConfig,
) -> Result<HtmlFormElement, ShellError> {
    let form = form_by_id(document, &config.manual_form_id)?;
    let name = required_control_value(document, &config.manual_name_input_id)?;
    let email = required_control_value(document, &config.manual_email_input_id)?;
    let user = ManualUser::from_form_values(&name, &email)?;
    let payload = encode_manual_users(std::slice::from_ref(&user))?;

    named_form_input(&form, &config.users_field_name)
        .ok_or_else(|| ShellError::FieldNotFound(config.users_field_name.clone()))?
        .set_value(&payload);
    if let Some(flag) = named_form_input(&form, &config.manual_flag_field_name) {
        flag.set_value("true");
    }
    info!(form = %config.manual_form_id, "manual user payload written");
    Ok(form)
}

fn form_by_id(document: &Document, id: &str) -> Result<HtmlFormElement, ShellError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        .ok_or_else(|| ShellError::FormNotFound(id.to_string()))
}

fn required_control_value(document: &Document, id: &str) -> Result<String, ShellError> {
    document
        .get_element_by_id(id)
        .and_then(|element| control_value(&element))
        .ok_or_else(|| ShellError::FieldNotFound(id.to_string()))
}

fn named_form_input(form: &HtmlFormElement, name: &str) -> Option<HtmlInputElement> {
    form.elements()
        .named_item(name)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

fn submit(form: &HtmlFormElement, id: &str) -> Result<(), ShellError> {
    debug!(form = id, "submitting form");
    form.submit().map_err(|_| ShellError::Submit(id.to_string()))
}
