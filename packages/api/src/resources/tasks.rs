use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskStatus, TaskUpdate};

use super::StatusFilter;

/// `/tasks`.
pub struct TasksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The backend answers with the task fields only; the ids it omits are
    /// filled in from the request so the result can be shown right away.
    pub async fn create(&self, task: &NewTask) -> Result<Task, ApiError> {
        let mut created: Task = self.client.post("/tasks/", task).await?;
        if created.project_id == 0 {
            created.project_id = task.project_id;
        }
        if created.assigned_to.is_none() {
            created.assigned_to = task.assigned_to;
        }
        Ok(created)
    }

    pub async fn get(&self, task_id: i64) -> Result<Task, ApiError> {
        self.client.get(&format!("/tasks/{task_id}")).await
    }

    pub async fn update(&self, task_id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        let mut updated: Task = self.client.put(&format!("/tasks/{task_id}"), update).await?;
        if updated.task_id == 0 {
            updated.task_id = task_id;
        }
        Ok(updated)
    }

    pub async fn delete(&self, task_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/tasks/{task_id}")).await
    }

    pub async fn for_project(
        &self,
        project_id: i64,
        status: Option<&TaskStatus>,
    ) -> Result<Vec<Task>, ApiError> {
        let filter = StatusFilter {
            status: status.map(TaskStatus::as_str),
        };
        self.client
            .get_with_query(&format!("/tasks/project/{project_id}/tasks"), &filter)
            .await
    }

    /// Tasks assigned to the user.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Task>, ApiError> {
        self.client.get(&format!("/tasks/user/{user_id}/tasks")).await
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{post, put};
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{authorized, serve, signed_in_client};

    async fn create(headers: HeaderMap, Json(body): Json<serde_json::Value>) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if body["title"].as_str().is_some_and(|t| t.len() < 3) {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!([{"msg": "title too short"}])),
            )
                .into_response();
        }
        Json(json!({
            "title": body["title"], "description": body["description"],
            "status": body["status"], "due_date": body["due_date"]
        }))
        .into_response()
    }

    async fn update(Path(_task_id): Path<i64>, Json(body): Json<serde_json::Value>) -> Response {
        Json(json!({
            "title": "Copy", "description": "Write the copy",
            "status": body["status"], "due_date": "2030-01-01T00:00:00"
        }))
        .into_response()
    }

    fn backend() -> Router {
        Router::new()
            .route("/tasks/", post(create))
            .route("/tasks/{task_id}", put(update))
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: "Write the landing page copy".to_string(),
            status: TaskStatus::Todo,
            due_date: "2030-01-15T09:30".to_string(),
            project_id: 3,
            assigned_to: Some(7),
        }
    }

    #[tokio::test]
    async fn test_create_fills_missing_ids() {
        let client = signed_in_client(&serve(backend()).await);
        let task = client.tasks().create(&new_task("Draft copy")).await.unwrap();
        assert_eq!(task.project_id, 3);
        assert_eq!(task.assigned_to, Some(7));
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn test_create_validation_error() {
        let client = signed_in_client(&serve(backend()).await);
        let err = client.tasks().create(&new_task("ab")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "title too short");
    }

    #[tokio::test]
    async fn test_update_keeps_task_id() {
        let client = signed_in_client(&serve(backend()).await);
        let update = TaskUpdate {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let task = client.tasks().update(12, &update).await.unwrap();
        assert_eq!(task.task_id, 12);
        assert!(task.status.is_done());
    }
}
