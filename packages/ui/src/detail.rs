//! Loads behind the project and task detail pages.

use api::{ApiClient, ApiError, Member, Project, Task};

use crate::dashboard::can_manage_task;

/// A project with its tasks, fetched together.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// Fetch the project and its task list concurrently.
///
/// Either failure fails the whole load, so the page never renders a project
/// with a silently missing task list.
pub async fn load_project(api: &ApiClient, project_id: i64) -> Result<ProjectDetail, ApiError> {
    let projects = api.projects();
    let tasks = api.tasks();
    let (project, tasks) =
        futures::try_join!(projects.get(project_id), tasks.for_project(project_id, None))?;
    Ok(ProjectDetail { project, tasks })
}

/// A task together with its project, when the project could be read.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDetail {
    pub task: Task,
    pub project: Option<Project>,
}

impl TaskDetail {
    /// The assignee, resolved against the project's members.
    pub fn assignee(&self) -> Option<&Member> {
        let assigned = self.task.assigned_to?;
        self.project
            .as_ref()?
            .members
            .iter()
            .find(|member| member.user_id == assigned)
    }

    pub fn can_manage(&self, user_id: i64) -> bool {
        let owner = self.project.as_ref().map(|project| project.owner_id);
        can_manage_task(&self.task, user_id, owner)
    }
}

/// Fetch a task, then its project for the member list and owner.
///
/// A missing project only degrades the page; an expired session still fails
/// the load so the caller can redirect.
pub async fn load_task(api: &ApiClient, task_id: i64) -> Result<TaskDetail, ApiError> {
    let task = api.tasks().get(task_id).await?;
    let project = match api.projects().get(task.project_id).await {
        Ok(project) => Some(project),
        Err(err) if err.is_unauthorized() => return Err(err),
        Err(err) => {
            tracing::warn!(task_id, project_id = task.project_id, "project lookup failed: {}", err);
            None
        }
    };
    Ok(TaskDetail { task, project })
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use api::ErrorKind;

    use super::*;
    use crate::test_support::{serve, server_error, signed_in_client};

    async fn project(Path(project_id): Path<i64>) -> Response {
        if project_id != 1 {
            return (StatusCode::NOT_FOUND, Json(json!({"detail": "Project not found"}))).into_response();
        }
        Json(json!({
            "project_id": 1, "title": "Website", "description": "Public site relaunch",
            "status": "active", "owner_id": 7,
            "members": [
                {"user_id": 7, "name": "Ana", "email": "ana@example.com", "role": "user"},
                {"user_id": 9, "name": "Bo", "email": "bo@example.com", "role": "user"}
            ]
        }))
        .into_response()
    }

    async fn project_tasks() -> Json<serde_json::Value> {
        Json(json!([{
            "title": "Copy", "description": "Write the copy", "status": "todo",
            "due_date": "2030-01-01T00:00:00", "task_id": 4, "project_id": 1, "assigned_to": 9
        }]))
    }

    async fn task(Path(task_id): Path<i64>) -> Json<serde_json::Value> {
        let project_id = if task_id == 5 { 2 } else { 1 };
        Json(json!({
            "title": "Copy", "description": "Write the copy", "status": "todo",
            "due_date": "2030-01-01T00:00:00", "task_id": task_id, "project_id": project_id,
            "assigned_to": 9
        }))
    }

    #[tokio::test]
    async fn test_project_and_tasks_load_together() {
        let router = Router::new()
            .route("/projects/{project_id}", get(project))
            .route("/tasks/project/{project_id}/tasks", get(project_tasks));
        let client = signed_in_client(&serve(router).await);

        let detail = load_project(&client, 1).await.unwrap();
        assert_eq!(detail.project.title, "Website");
        assert_eq!(detail.tasks.len(), 1);
        assert_eq!(detail.tasks[0].task_id, 4);
    }

    #[tokio::test]
    async fn test_failed_task_list_fails_the_project_load() {
        let router = Router::new()
            .route("/projects/{project_id}", get(project))
            .route("/tasks/project/{project_id}/tasks", get(server_error));
        let client = signed_in_client(&serve(router).await);

        let err = load_project(&client, 1).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.status, Some(500));
    }

    #[tokio::test]
    async fn test_backend_task_is_managed_by_project_owner() {
        let router = Router::new()
            .route("/tasks/{task_id}", get(task))
            .route("/projects/{project_id}", get(project));
        let client = signed_in_client(&serve(router).await);

        let detail = load_task(&client, 4).await.unwrap();
        assert_eq!(detail.task.created_by, None);
        assert!(detail.can_manage(7));
        assert!(!detail.can_manage(9));
        assert_eq!(detail.assignee().map(|m| m.name.as_str()), Some("Bo"));
    }

    #[tokio::test]
    async fn test_unreadable_project_leaves_task_unmanaged() {
        let router = Router::new()
            .route("/tasks/{task_id}", get(task))
            .route("/projects/{project_id}", get(project));
        let client = signed_in_client(&serve(router).await);

        let detail = load_task(&client, 5).await.unwrap();
        assert_eq!(detail.project, None);
        assert_eq!(detail.assignee(), None);
        assert!(!detail.can_manage(7));
    }

    #[tokio::test]
    async fn test_expired_session_fails_the_task_load() {
        let router = Router::new()
            .route("/tasks/{task_id}", get(task))
            .route(
                "/projects/{project_id}",
                get(|| async { (StatusCode::UNAUTHORIZED, r#"{"detail": "Not authenticated"}"#) }),
            );
        let client = signed_in_client(&serve(router).await);

        let err = load_task(&client, 4).await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
