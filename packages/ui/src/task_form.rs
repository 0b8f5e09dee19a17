use api::{Project, Task, TaskStatus};
use dioxus::prelude::*;

use crate::context::use_api;
use crate::dashboard::Patch;
use crate::field::{field_error, FormMessage};
use crate::forms::{submit, FieldErrors, FormError, TaskDraft};
use crate::guard::LOGIN_PATH;
use crate::triage::surface;

/// Form for a new task assigned to the signed-in user.
///
/// `projects` feeds the project picker; `project_id` preselects one.
#[component]
pub fn CreateTaskForm(
    projects: Vec<Project>,
    #[props(!optional)] project_id: Option<i64>,
    on_done: EventHandler<Patch>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut draft = use_signal(move || TaskDraft {
        project_id: project_id.map(|id| id.to_string()).unwrap_or_default(),
        ..Default::default()
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        let client = api();
        let session = client.session().clone();
        let Some(assignee) = session.user_id() else {
            nav.replace(LOGIN_PATH);
            return;
        };
        let now = chrono::Local::now().naive_local();
        submitting.set(true);
        message.set(None);
        let result = submit(draft().validate(assignee, now), move |body| async move {
            client.tasks().create(&body).await
        })
        .await;
        submitting.set(false);
        match result {
            Ok(task) => {
                errors.set(FieldErrors::new());
                draft.set(TaskDraft {
                    project_id: project_id.map(|id| id.to_string()).unwrap_or_default(),
                    ..Default::default()
                });
                on_done.call(Patch::TaskCreated(task));
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => message.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "entity-form",
            h3 { "New task" }
            TaskFields { draft, errors }
            div {
                class: "form-field",
                label { "Project" }
                select {
                    value: draft.read().project_id.clone(),
                    onchange: move |evt: FormEvent| draft.write().project_id = evt.value(),
                    option { value: "", "Select a project" }
                    for project in projects.iter() {
                        option {
                            key: "{project.project_id}",
                            value: "{project.project_id}",
                            selected: draft.read().project_id == project.project_id.to_string(),
                            "{project.title}"
                        }
                    }
                }
                {field_error(&errors.read(), "project_id")}
            }
            FormMessage { message: message() }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Creating..." } else { "Create task" }
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

/// Inline edit form for one task.
#[component]
pub fn EditTaskForm(task: Task, on_done: EventHandler<Patch>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let task_id = task.task_id;
    let draft = use_signal(|| TaskDraft::from_task(&task));
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
            client.tasks().update(task_id, &update).await.map(|_| update)
        })
        .await;
        submitting.set(false);
        match result {
            Ok(update) => {
                errors.set(FieldErrors::new());
                on_done.call(Patch::TaskUpdated(task_id, update));
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => message.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "entity-form inline",
            TaskFields { draft, errors }
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
fn TaskFields(draft: Signal<TaskDraft>, errors: Signal<FieldErrors>) -> Element {
    let mut draft = draft;
    let status = if draft.read().status.is_empty() {
        TaskStatus::default().as_str().to_string()
    } else {
        draft.read().status.clone()
    };

    rsx! {
        div {
            class: "form-field",
            label { "Title" }
            input {
                r#type: "text",
                placeholder: "Task title",
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
                for option_status in TaskStatus::ALL {
                    option {
                        key: "{option_status}",
                        value: "{option_status}",
                        selected: option_status.as_str() == status,
                        "{option_status.label()}"
                    }
                }
            }
        }
        div {
            class: "form-field",
            label { "Due date" }
            input {
                r#type: "datetime-local",
                value: draft.read().due_date.clone(),
                oninput: move |evt: FormEvent| draft.write().due_date = evt.value(),
            }
            {field_error(&errors.read(), "due_date")}
        }
    }
}
