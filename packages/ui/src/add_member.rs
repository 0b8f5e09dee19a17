use api::User;
use dioxus::prelude::*;

use crate::context::use_api;
use crate::dashboard::Patch;
use crate::field::{field_error, FormMessage};
use crate::forms::{submit, validate_member, FieldErrors, FormError};
use crate::guard::LOGIN_PATH;
use crate::membership::load_candidates;
use crate::triage::surface;

/// Pick a user who is not yet part of the project and add them as a member.
#[component]
pub fn AddMemberForm(project_id: i64, on_done: EventHandler<Patch>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut candidates = use_signal(Vec::<User>::new);
    let mut selected = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut message = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut submitting = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = api();
        let session = client.session().clone();
        let Some(user_id) = session.user_id() else {
            nav.replace(LOGIN_PATH);
            return;
        };
        loading.set(true);
        match load_candidates(&client, project_id, user_id).await {
            Ok(users) => candidates.set(users),
            Err(err) => message.set(surface(&session, nav, &err)),
        }
        loading.set(false);
    });

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        let client = api();
        let session = client.session().clone();
        submitting.set(true);
        message.set(None);
        let result = submit(validate_member(&selected(), project_id), move |membership| async move {
            client
                .projects()
                .add_member(project_id, &membership)
                .await
                .map(|_| membership.user_id)
        })
        .await;
        submitting.set(false);
        match result {
            Ok(user_id) => {
                errors.set(FieldErrors::new());
                selected.set(String::new());
                candidates.write().retain(|user| user.user_id != user_id);
                on_done.call(Patch::MemberAdded { project_id, user_id });
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => message.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "entity-form inline",
            h4 { "Add member" }
            if loading() {
                p { class: "muted", "Loading users..." }
            } else if candidates.read().is_empty() {
                p { class: "muted", "Everyone is already a member of this project." }
            } else {
                div {
                    class: "form-field",
                    select {
                        value: selected(),
                        onchange: move |evt: FormEvent| selected.set(evt.value()),
                        option { value: "", "Select a user" }
                        for user in candidates.read().iter() {
                            option {
                                key: "{user.user_id}",
                                value: "{user.user_id}",
                                "{user.name} ({user.email})"
                            }
                        }
                    }
                    {field_error(&errors.read(), "user_id")}
                }
            }
            FormMessage { message: message() }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: submitting() || loading(),
                    onclick: handle_submit,
                    if submitting() { "Adding..." } else { "Add" }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
