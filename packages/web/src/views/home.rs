//! Dashboard: the signed-in user's projects and tasks.

use std::future::Future;

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::dashboard::{run_mutation, DashboardEffect, DashboardSource, DashboardState, InlineEdit, Patch};
use ui::triage::surface;
use ui::{
    confirm, use_api, use_current_session, AddMemberForm, CreateProjectForm, CreateTaskForm,
    EditProjectForm, EditTaskForm, FormMessage,
};

use crate::Route;

/// Signals a dashboard mutation writes to.
#[derive(Clone, Copy)]
struct DashboardView {
    state: Signal<DashboardState>,
    error: Signal<Option<String>>,
    editing: Signal<InlineEdit>,
}

/// Run `mutation`, publish its patch, then reload everything.
async fn mutate<M>(api: Signal<ApiClient>, nav: Navigator, mut view: DashboardView, mutation: M)
where
    M: Future<Output = Result<Patch, ApiError>>,
{
    let client = api();
    let session = client.session().clone();
    let Some(user_id) = session.user_id() else {
        nav.replace(Route::Login {});
        return;
    };
    view.error.set(None);
    let current = view.state.read().clone();
    let result = run_mutation(&client, user_id, &current, mutation, |effect| match effect {
        DashboardEffect::Optimistic(next) | DashboardEffect::Reloaded(next) => view.state.set(next),
        DashboardEffect::ReloadFailed(err) => view.error.set(surface(&session, nav, &err)),
    })
    .await;
    match result {
        Ok(patch) => view.editing.write().settle(&patch),
        Err(err) => view.error.set(surface(&session, nav, &err)),
    }
}

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let session = use_current_session();
    let state = use_signal(DashboardState::default);
    let error = use_signal(|| None::<String>);
    let mut editing = use_signal(InlineEdit::default);
    let mut loading = use_signal(|| true);
    let mut show_project_form = use_signal(|| false);
    let mut show_task_form = use_signal(|| false);
    let mut adding_member = use_signal(|| None::<i64>);
    let view = DashboardView { state, error, editing };

    let _loader = use_resource(move || async move {
        let client = api();
        let session = client.session().clone();
        let Some(user_id) = session.user_id() else {
            nav.replace(Route::Login {});
            return;
        };
        let mut view = view;
        loading.set(true);
        match client.load(user_id).await {
            Ok(loaded) => {
                view.state.set(loaded);
                view.error.set(None);
            }
            Err(err) => view.error.set(surface(&session, nav, &err)),
        }
        loading.set(false);
    });

    // Forms have already called the API; only the patch and reload remain.
    let on_patch = move |patch: Patch| {
        match &patch {
            Patch::ProjectCreated(_) => show_project_form.set(false),
            Patch::TaskCreated(_) => show_task_form.set(false),
            Patch::MemberAdded { .. } => adding_member.set(None),
            _ => {}
        }
        spawn(mutate(api, nav, view, std::future::ready(Ok::<_, ApiError>(patch))));
    };

    let delete_project = move |project_id: i64| {
        if !confirm("Delete this project and all of its tasks?") {
            return;
        }
        let client = api();
        spawn(mutate(api, nav, view, async move {
            client
                .projects()
                .delete(project_id)
                .await
                .map(|_| Patch::ProjectDeleted(project_id))
        }));
    };

    let delete_task = move |task_id: i64| {
        if !confirm("Delete this task?") {
            return;
        }
        let client = api();
        spawn(mutate(api, nav, view, async move {
            client
                .tasks()
                .delete(task_id)
                .await
                .map(|_| Patch::TaskDeleted(task_id))
        }));
    };

    let user_id = session.as_ref().map(|s| s.user_id);
    let greeting = session.as_ref().map(|s| s.display_name().to_string()).unwrap_or_default();
    let stats = state.read().stats();
    let current = state.read().clone();

    rsx! {
        div {
            class: "dashboard",
            h1 { "Welcome, {greeting}" }

            div {
                class: "stats",
                div { class: "stat-card", span { class: "stat-value", "{stats.pending}" } span { "Pending tasks" } }
                div { class: "stat-card", span { class: "stat-value", "{stats.completed}" } span { "Completed tasks" } }
                div { class: "stat-card", span { class: "stat-value", "{stats.active_projects}" } span { "Active projects" } }
            }

            FormMessage { message: error() }
            if loading() {
                p { class: "muted", "Loading..." }
            }

            section {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h2 { "My projects" }
                    button {
                        class: "primary",
                        onclick: move |_| show_project_form.toggle(),
                        if show_project_form() { "Close" } else { "New project" }
                    }
                }
                if show_project_form() {
                    CreateProjectForm {
                        on_done: on_patch,
                        on_cancel: move |_| show_project_form.set(false),
                    }
                }
                if current.projects.is_empty() && !loading() {
                    p { class: "muted", "You have no projects yet." }
                }
                for project in current.projects.iter().cloned() {
                    div {
                        key: "{project.project_id}",
                        class: "card",
                        if editing.read().is_editing_project(project.project_id) {
                            EditProjectForm {
                                project: project.clone(),
                                on_done: on_patch,
                                on_cancel: move |_| editing.write().close_project(),
                            }
                        } else {
                            div {
                                class: "card-header",
                                Link {
                                    to: Route::ProjectView { project_id: project.project_id },
                                    h3 { "{project.title}" }
                                }
                                span { class: "badge status-{project.status}", "{project.status.label()}" }
                            }
                            p { "{project.description}" }
                            if user_id.is_some_and(|id| project.is_owned_by(id)) {
                                div {
                                    class: "card-actions",
                                    button {
                                        class: "secondary",
                                        onclick: move |_| editing.write().open_project(project.project_id),
                                        "Edit"
                                    }
                                    button {
                                        class: "secondary",
                                        onclick: move |_| adding_member.set(Some(project.project_id)),
                                        "Add member"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: move |_| delete_project(project.project_id),
                                        "Delete"
                                    }
                                }
                            }
                            if adding_member() == Some(project.project_id) {
                                AddMemberForm {
                                    project_id: project.project_id,
                                    on_done: on_patch,
                                    on_cancel: move |_| adding_member.set(None),
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h2 { "My tasks" }
                    button {
                        class: "primary",
                        disabled: current.projects.is_empty(),
                        onclick: move |_| show_task_form.toggle(),
                        if show_task_form() { "Close" } else { "New task" }
                    }
                }
                if show_task_form() {
                    CreateTaskForm {
                        projects: current.projects.clone(),
                        project_id: None,
                        on_done: on_patch,
                        on_cancel: move |_| show_task_form.set(false),
                    }
                }
                if current.tasks.is_empty() && !loading() {
                    p { class: "muted", "No tasks assigned to you." }
                }
                for task in current.tasks.iter().cloned() {
                    div {
                        key: "{task.task_id}",
                        class: "card",
                        if editing.read().is_editing_task(task.task_id) {
                            EditTaskForm {
                                task: task.clone(),
                                on_done: on_patch,
                                on_cancel: move |_| editing.write().close_task(),
                            }
                        } else {
                            div {
                                class: "card-header",
                                Link {
                                    to: Route::TaskView { task_id: task.task_id },
                                    h3 { "{task.title}" }
                                }
                                span { class: "badge status-{task.status}", "{task.status.label()}" }
                            }
                            p { class: "muted",
                                {task.project_title.clone().or_else(|| current.project_title(task.project_id).map(str::to_string)).unwrap_or_default()}
                                if let Some(day) = task.due_day() {
                                    " · due {day}"
                                }
                            }
                            if user_id.is_some_and(|id| current.can_manage_task(&task, id)) {
                                div {
                                    class: "card-actions",
                                    button {
                                        class: "secondary",
                                        onclick: move |_| editing.write().open_task(task.task_id),
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: move |_| delete_task(task.task_id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
