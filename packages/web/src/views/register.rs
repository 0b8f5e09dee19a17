use api::UserRole;
use dioxus::prelude::*;
use ui::forms::{submit, FieldErrors, FormError, RegisterDraft};
use ui::triage::surface;
use ui::{field_error, use_api, FormMessage};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut draft = use_signal(RegisterDraft::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        let client = api();
        let session = client.session().clone();
        submitting.set(true);
        error.set(None);
        success.set(None);
        let result = submit(draft().validate(), move |user| async move {
            client.auth().register(&user).await
        })
        .await;
        submitting.set(false);
        match result {
            Ok(user) => {
                tracing::info!(user_id = user.user_id, "registered");
                errors.set(FieldErrors::new());
                draft.set(RegisterDraft::default());
                success.set(Some(format!("Account created for {}. You can sign in now.", user.email)));
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => error.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "auth-container",
            h1 { "Create an account" }

            div {
                class: "auth-card",
                if let Some(message) = success() {
                    div { class: "form-message success", "{message}" }
                }
                div {
                    class: "form-field",
                    label { "Name" }
                    input {
                        r#type: "text",
                        value: draft.read().name.clone(),
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                    {field_error(&errors.read(), "name")}
                }
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: draft.read().email.clone(),
                        oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                    }
                    {field_error(&errors.read(), "email")}
                }
                div {
                    class: "form-field",
                    label { "Role" }
                    select {
                        value: draft.read().role.clone(),
                        onchange: move |evt: FormEvent| draft.write().role = evt.value(),
                        for role in UserRole::ALL {
                            option {
                                key: "{role}",
                                value: "{role}",
                                selected: draft.read().role == role.as_str(),
                                "{role.label()}"
                            }
                        }
                    }
                    {field_error(&errors.read(), "role")}
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: draft.read().password.clone(),
                        oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                    }
                    {field_error(&errors.read(), "password")}
                }
                div {
                    class: "form-field",
                    label { "Confirm password" }
                    input {
                        r#type: "password",
                        value: draft.read().confirm_password.clone(),
                        oninput: move |evt: FormEvent| draft.write().confirm_password = evt.value(),
                    }
                    {field_error(&errors.read(), "confirm_password")}
                }
                FormMessage { message: error() }
                button {
                    class: "primary wide",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Creating account..." } else { "Register" }
                }
                p {
                    class: "muted",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
