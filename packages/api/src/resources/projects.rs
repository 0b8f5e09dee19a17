use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Membership, NewMembership, NewProject, Project, ProjectStatus, ProjectUpdate, User};

use super::StatusFilter;

/// `/projects`.
pub struct ProjectsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.client.post("/projects/", project).await
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get_with_query("/projects/", &[("limit", 100)]).await
    }

    /// Project with members and tasks embedded.
    pub async fn get(&self, project_id: i64) -> Result<Project, ApiError> {
        self.client.get(&format!("/projects/{project_id}")).await
    }

    pub async fn update(&self, project_id: i64, update: &ProjectUpdate) -> Result<Project, ApiError> {
        self.client.put(&format!("/projects/{project_id}"), update).await
    }

    pub async fn delete(&self, project_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/projects/{project_id}")).await
    }

    /// Projects the user is a member of, optionally filtered by status.
    pub async fn for_user(
        &self,
        user_id: i64,
        status: Option<&ProjectStatus>,
    ) -> Result<Vec<Project>, ApiError> {
        let filter = StatusFilter {
            status: status.map(ProjectStatus::as_str),
        };
        self.client
            .get_with_query(&format!("/projects/user/{user_id}/projects"), &filter)
            .await
    }

    pub async fn add_member(
        &self,
        project_id: i64,
        member: &NewMembership,
    ) -> Result<Membership, ApiError> {
        self.client
            .post(&format!("/projects/{project_id}/members"), member)
            .await
    }

    pub async fn members(&self, project_id: i64) -> Result<Vec<User>, ApiError> {
        self.client.get(&format!("/projects/{project_id}/members")).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{anonymous_client, authorized, serve, signed_in_client};

    async fn user_projects(
        headers: HeaderMap,
        Path(user_id): Path<i64>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Response {
        if !authorized(&headers) {
            return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Could not validate credentials"})))
                .into_response();
        }
        let status = query.get("status").cloned().unwrap_or_else(|| "active".to_string());
        Json(json!([{
            "project_id": 1, "title": "Website", "description": "Public site relaunch",
            "status": status, "owner_id": user_id
        }]))
        .into_response()
    }

    async fn project(headers: HeaderMap, Path(project_id): Path<i64>) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if project_id != 1 {
            return (StatusCode::NOT_FOUND, Json(json!({"detail": "Project not found"}))).into_response();
        }
        Json(json!({
            "project_id": 1, "title": "Website", "description": "Public site relaunch",
            "status": "active", "owner_id": 7, "created_at": "2024-05-01T10:00:00",
            "members": [{"user_id": 7, "name": "Ana", "email": "ana@example.com", "role": "user"}],
            "tasks": [{"task_id": 4, "title": "Copy", "description": "Write the copy",
                       "status": "done", "due_date": "2030-01-01T00:00:00", "project_id": 1}]
        }))
        .into_response()
    }

    async fn remove(headers: HeaderMap, Path(_id): Path<i64>) -> StatusCode {
        if authorized(&headers) {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::UNAUTHORIZED
        }
    }

    fn backend() -> Router {
        Router::new()
            .route("/projects/user/{user_id}/projects", get(user_projects))
            .route("/projects/{project_id}", get(project).delete(remove))
    }

    #[tokio::test]
    async fn test_for_user_attaches_bearer_and_filter() {
        let client = signed_in_client(&serve(backend()).await);
        let projects = client
            .projects()
            .for_user(7, Some(&ProjectStatus::OnHold))
            .await
            .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].owner_id, 7);
        assert_eq!(projects[0].status, ProjectStatus::OnHold);
    }

    #[tokio::test]
    async fn test_get_decodes_details() {
        let client = signed_in_client(&serve(backend()).await);
        let project = client.projects().get(1).await.unwrap();
        assert_eq!(project.members.len(), 1);
        assert_eq!(project.tasks[0].task_id, 4);
    }

    #[tokio::test]
    async fn test_not_found_detail_is_surfaced() {
        let client = signed_in_client(&serve(backend()).await);
        let err = client.projects().get(99).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Status);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "Project not found");
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let client = signed_in_client(&serve(backend()).await);
        client.projects().delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_signed_out_call_never_leaves_the_client() {
        let client = anonymous_client(&serve(backend()).await);
        let err = client.projects().for_user(7, None).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!err.response_received());
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let client = signed_in_client(&serve(backend()).await);
        client.session().set_session("expired", 7, "Ana", "ana@example.com");
        let err = client.projects().for_user(7, None).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.status, Some(401));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_no_response() {
        let client = signed_in_client("http://127.0.0.1:1");
        let err = client.projects().get(1).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert!(!err.response_received());
    }
}
