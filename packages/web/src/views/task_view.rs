//! One task, with its assignee resolved through the project's members.

use dioxus::prelude::*;
use ui::dashboard::Patch;
use ui::detail::{load_task, TaskDetail};
use ui::triage::surface;
use ui::{confirm, use_api, use_current_session, EditTaskForm, FormMessage};

use crate::Route;

#[component]
pub fn TaskView(task_id: i64) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let session = use_current_session();
    let mut detail = use_signal(|| None::<TaskDetail>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut editing = use_signal(|| false);

    let mut loader = use_resource(use_reactive!(|(task_id,)| async move {
        let client = api();
        let session = client.session().clone();
        loading.set(true);
        match load_task(&client, task_id).await {
            Ok(loaded) => {
                error.set(None);
                detail.set(Some(loaded));
            }
            Err(err) => error.set(surface(&session, nav, &err)),
        }
        loading.set(false);
    }));

    let on_patch = move |patch: Patch| {
        if let Patch::TaskUpdated(_, update) = &patch {
            if let Some(current) = detail.write().as_mut() {
                update.apply_to(&mut current.task);
            }
        }
        editing.set(false);
        loader.restart();
    };

    let delete_task = move |_| async move {
        if !confirm("Delete this task?") {
            return;
        }
        let project_id = detail.read().as_ref().map(|d| d.task.project_id).unwrap_or_default();
        let client = api();
        match client.tasks().delete(task_id).await {
            Ok(()) if project_id > 0 => {
                nav.replace(Route::ProjectView { project_id });
            }
            Ok(()) => {
                nav.replace(Route::Home {});
            }
            Err(err) => error.set(surface(client.session(), nav, &err)),
        }
    };

    let Some(loaded) = detail() else {
        return rsx! {
            FormMessage { message: error() }
            if loading() {
                p { class: "muted", "Loading task..." }
            } else {
                Link { to: Route::Home {}, "Back to dashboard" }
            }
        };
    };
    let can_manage = session.as_ref().is_some_and(|s| loaded.can_manage(s.user_id));
    let current = loaded.task.clone();
    let due = current.due_day().unwrap_or("-").to_string();
    let assignee_label = match loaded.assignee() {
        Some(member) => format!("{} ({})", member.name, member.email),
        None if current.assigned_to.is_some() => "Unknown member".to_string(),
        None => "Unassigned".to_string(),
    };
    let project_label = current
        .project_title
        .clone()
        .or_else(|| loaded.project.as_ref().map(|p| p.title.clone()))
        .unwrap_or_else(|| format!("Project #{}", current.project_id));

    rsx! {
        div {
            class: "detail",
            if current.project_id > 0 {
                Link { to: Route::ProjectView { project_id: current.project_id }, "← {project_label}" }
            } else {
                Link { to: Route::Home {}, "← Dashboard" }
            }
            FormMessage { message: error() }

            if editing() {
                EditTaskForm {
                    task: current.clone(),
                    on_done: on_patch,
                    on_cancel: move |_| editing.set(false),
                }
            } else {
                div {
                    class: "card-header",
                    h1 { "{current.title}" }
                    span { class: "badge status-{current.status}", "{current.status.label()}" }
                }
                p { "{current.description}" }
                dl {
                    dt { "Due" }
                    dd { "{due}" }
                    dt { "Assigned to" }
                    dd { "{assignee_label}" }
                }
                if can_manage {
                    div {
                        class: "card-actions",
                        button { class: "secondary", onclick: move |_| editing.set(true), "Edit" }
                        button { class: "danger", onclick: delete_task, "Delete" }
                    }
                }
            }
        }
    }
}
