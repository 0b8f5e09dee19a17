//! One project with its members, tasks and comments.

use api::{Comment, Project, Task};
use dioxus::prelude::*;
use ui::dashboard::Patch;
use ui::detail::load_project;
use ui::triage::surface;
use ui::{
    confirm, use_api, use_current_session, AddMemberForm, CommentForm, CreateTaskForm,
    EditProjectForm, FormMessage,
};

use crate::Route;

#[component]
pub fn ProjectView(project_id: i64) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let session = use_current_session();
    let mut project = use_signal(|| None::<Project>);
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut editing = use_signal(|| false);
    let mut show_task_form = use_signal(|| false);
    let mut adding_member = use_signal(|| false);

    // The project and its tasks load as one; comments are optional.
    let mut loader = use_resource(use_reactive!(|(project_id,)| async move {
        let client = api();
        let session = client.session().clone();
        loading.set(true);
        let comments_api = client.comments();
        let (detail, project_comments) = futures::join!(
            load_project(&client, project_id),
            comments_api.for_project(project_id),
        );
        match detail {
            Ok(loaded) => {
                project.set(Some(loaded.project));
                tasks.set(loaded.tasks);
                error.set(None);
            }
            Err(err) => {
                project.set(None);
                error.set(surface(&session, nav, &err));
            }
        }
        match project_comments {
            Ok(loaded) => comments.set(loaded),
            Err(err) => tracing::warn!(project_id, "failed to load project comments: {}", err),
        }
        loading.set(false);
    }));

    let on_patch = move |patch: Patch| {
        match &patch {
            Patch::ProjectUpdated(_, update) => {
                if let Some(current) = project.write().as_mut() {
                    update.apply_to(current);
                }
                editing.set(false);
            }
            Patch::TaskCreated(task) => {
                tasks.write().push(task.clone());
                show_task_form.set(false);
            }
            Patch::MemberAdded { .. } => adding_member.set(false),
            _ => {}
        }
        loader.restart();
    };

    let on_comment = move |comment: Comment| {
        comments.write().push(comment);
        loader.restart();
    };

    let delete_project = move |_| async move {
        if !confirm("Delete this project and all of its tasks?") {
            return;
        }
        let client = api();
        match client.projects().delete(project_id).await {
            Ok(()) => {
                nav.replace(Route::Home {});
            }
            Err(err) => error.set(surface(client.session(), nav, &err)),
        }
    };

    let Some(current) = project() else {
        return rsx! {
            FormMessage { message: error() }
            if loading() {
                p { class: "muted", "Loading project..." }
            } else {
                Link { to: Route::Home {}, "Back to dashboard" }
            }
        };
    };
    let is_owner = session.as_ref().is_some_and(|s| current.is_owned_by(s.user_id));

    rsx! {
        div {
            class: "detail",
            Link { to: Route::Home {}, "← Dashboard" }
            FormMessage { message: error() }

            if editing() {
                EditProjectForm {
                    project: current.clone(),
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
                if let Some(owner) = current.owner_name.as_ref() {
                    p { class: "muted", "Owner: {owner}" }
                }
                if is_owner {
                    div {
                        class: "card-actions",
                        button { class: "secondary", onclick: move |_| editing.set(true), "Edit" }
                        button { class: "secondary", onclick: move |_| adding_member.set(true), "Add member" }
                        button { class: "danger", onclick: delete_project, "Delete" }
                    }
                }
            }

            section {
                class: "detail-section",
                h2 { "Members" }
                if adding_member() {
                    AddMemberForm {
                        project_id,
                        on_done: on_patch,
                        on_cancel: move |_| adding_member.set(false),
                    }
                }
                if current.members.is_empty() {
                    p { class: "muted", "No members yet." }
                }
                ul {
                    for member in current.members.iter() {
                        li { key: "{member.user_id}", "{member.name} ({member.email})" }
                    }
                }
            }

            section {
                class: "detail-section",
                div {
                    class: "section-header",
                    h2 { "Tasks" }
                    button {
                        class: "primary",
                        onclick: move |_| show_task_form.toggle(),
                        if show_task_form() { "Close" } else { "New task" }
                    }
                }
                if show_task_form() {
                    CreateTaskForm {
                        projects: vec![current.clone()],
                        project_id: Some(project_id),
                        on_done: on_patch,
                        on_cancel: move |_| show_task_form.set(false),
                    }
                }
                if tasks.read().is_empty() {
                    p { class: "muted", "No tasks in this project." }
                }
                for task in tasks.read().iter() {
                    div {
                        key: "{task.task_id}",
                        class: "card",
                        Link { to: Route::TaskView { task_id: task.task_id }, "{task.title}" }
                        span { class: "badge status-{task.status}", "{task.status.label()}" }
                        if let Some(day) = task.due_day() {
                            span { class: "muted", " due {day}" }
                        }
                    }
                }
            }

            section {
                class: "detail-section",
                h2 { "Comments" }
                for (index, comment) in comments.read().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "comment",
                        p { "{comment.content}" }
                        if let Some(created_at) = comment.created_at.as_ref() {
                            span { class: "muted", "{created_at}" }
                        }
                    }
                }
                CommentForm { project_id, on_posted: on_comment }
            }
        }
    }
}
