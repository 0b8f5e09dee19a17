use dioxus::prelude::*;

use crate::forms::FieldErrors;

/// The error for one field, if any.
pub fn field_error(errors: &FieldErrors, field: &str) -> Element {
    rsx! {
        if let Some(message) = errors.get(field) {
            p { class: "field-error", "{message}" }
        }
    }
}

/// Form-level message (server or network error).
#[component]
pub fn FormMessage(#[props(!optional)] message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "form-message error", "{message}" }
        }
    }
}
