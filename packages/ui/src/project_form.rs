use api::{Project, ProjectStatus};
use dioxus::prelude::*;

use crate::context::use_api;
use crate::dashboard::Patch;
use crate::field::{field_error, FormMessage};
use crate::forms::{submit, FieldErrors, FormError, ProjectDraft};
use crate::guard::LOGIN_PATH;
use crate::triage::surface;

/// Form for a new project owned by the signed-in user.
#[component]
pub fn CreateProjectForm(on_done: EventHandler<Patch>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut draft = use_signal(ProjectDraft::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        let client = api();
        let session = client.session().clone();
        let Some(owner_id) = session.user_id() else {
            nav.replace(LOGIN_PATH);
            return;
        };
        submitting.set(true);
        message.set(None);
        let result = submit(draft().validate(owner_id), move |body| async move {
            client.projects().create(&body).await
        })
        .await;
        submitting.set(false);
        match result {
            Ok(project) => {
                errors.set(FieldErrors::new());
                draft.set(ProjectDraft::default());
                on_done.call(Patch::ProjectCreated(project));
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => message.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "entity-form",
            h3 { "New project" }
            ProjectFields { draft, errors }
            FormMessage { message: message() }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Creating..." } else { "Create project" }
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

/// Inline edit form for one project.
#[component]
pub fn EditProjectForm(project: Project, on_done: EventHandler<Patch>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let project_id = project.project_id;
    let draft = use_signal(|| ProjectDraft::from_project(&project));
    let mut errors = use_signal(FieldErrors::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        let client = api();
        let session = client.session().clone();
        submitting.set(true);
        message.set(None);
        let result = submit(draft().validate_update(), move |update| async move {
            client.projects().update(project_id, &update).await.map(|_| update)
        })
        .await;
        submitting.set(false);
        match result {
            Ok(update) => {
                errors.set(FieldErrors::new());
                on_done.call(Patch::ProjectUpdated(project_id, update));
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => message.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "entity-form inline",
            ProjectFields { draft, errors }
            FormMessage { message: message() }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Saving..." } else { "Save" }
                }
                button {
                    class: "secondary",
                    disabled: submitting(),
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn ProjectFields(draft: Signal<ProjectDraft>, errors: Signal<FieldErrors>) -> Element {
    let mut draft = draft;
    let status = if draft.read().status.is_empty() {
        ProjectStatus::default().as_str().to_string()
    } else {
        draft.read().status.clone()
    };

    rsx! {
        div {
            class: "form-field",
            label { "Title" }
            input {
                r#type: "text",
                placeholder: "Project title",
                value: draft.read().title.clone(),
                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
            }
            {field_error(&errors.read(), "title")}
        }
        div {
            class: "form-field",
            label { "Description" }
            textarea {
                rows: 3,
                value: draft.read().description.clone(),
                oninput: move |evt: FormEvent| draft.write().description = evt.value(),
            }
            {field_error(&errors.read(), "description")}
        }
        div {
            class: "form-field",
            label { "Status" }
            select {
                value: "{status}",
                onchange: move |evt: FormEvent| draft.write().status = evt.value(),
                for option_status in ProjectStatus::ALL {
                    option {
                        key: "{option_status}",
                        value: "{option_status}",
                        selected: option_status.as_str() == status,
                        "{option_status.label()}"
                    }
                }
            }
        }
    }
}
