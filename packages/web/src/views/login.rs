//! Login page.

use dioxus::prelude::*;
use ui::triage::login_message;
use ui::{sign_in, use_api, FormMessage};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in
    if api.read().session().is_authorized() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Enter your email and password".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let client = api();
        match sign_in(&client, &email(), &password()).await {
            Ok(_) => {
                nav.replace(Route::Home {});
            }
            Err(err) => {
                error.set(Some(login_message(&err)));
                submitting.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "auth-container",
            h1 { "TaskDesk" }
            p { class: "muted", "Sign in to manage your projects and tasks." }

            div {
                class: "auth-card",
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                FormMessage { message: error() }
                button {
                    class: "primary wide",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
                p {
                    class: "muted",
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
