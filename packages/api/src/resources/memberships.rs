use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Membership, MembershipUpdate, NewMembership};

/// `/memberships`.
pub struct MembershipsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MembershipsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, membership: &NewMembership) -> Result<Membership, ApiError> {
        self.client.post("/memberships/", membership).await
    }

    pub async fn list(&self) -> Result<Vec<Membership>, ApiError> {
        self.client.get("/memberships/").await
    }

    pub async fn get(&self, membership_id: i64) -> Result<Membership, ApiError> {
        self.client.get(&format!("/memberships/{membership_id}")).await
    }

    pub async fn update(
        &self,
        membership_id: i64,
        update: &MembershipUpdate,
    ) -> Result<Membership, ApiError> {
        self.client
            .put(&format!("/memberships/{membership_id}"), update)
            .await
    }

    pub async fn delete(&self, membership_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/memberships/{membership_id}")).await
    }

    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Membership>, ApiError> {
        self.client
            .get(&format!("/memberships/user/{user_id}/memberships"))
            .await
    }

    pub async fn for_project(&self, project_id: i64) -> Result<Vec<Membership>, ApiError> {
        self.client
            .get(&format!("/memberships/project/{project_id}/memberships"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::models::MembershipRole;
    use crate::test_support::{anonymous_client, authorized, serve, signed_in_client};

    async fn project_memberships(headers: HeaderMap, Path(project_id): Path<i64>) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!([
            {"membership_id": 1, "user_id": 7, "project_id": project_id, "role": "owner"},
            {"membership_id": 2, "user_id": 9, "project_id": project_id, "role": "viewer",
             "is_active": false}
        ]))
        .into_response()
    }

    async fn user_memberships(headers: HeaderMap, Path(user_id): Path<i64>) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!([{"role": "member", "user_id": user_id}])).into_response()
    }

    async fn membership(headers: HeaderMap, Path(membership_id): Path<i64>) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!({"membership_id": membership_id, "user_id": 7, "project_id": 1, "role": "member"}))
            .into_response()
    }

    fn backend() -> Router {
        Router::new()
            .route("/memberships/project/{project_id}/memberships", get(project_memberships))
            .route("/memberships/user/{user_id}/memberships", get(user_memberships))
            .route("/memberships/{membership_id}", get(membership))
    }

    #[tokio::test]
    async fn test_for_project_hits_nested_path() {
        let client = signed_in_client(&serve(backend()).await);
        let memberships = client.memberships().for_project(3).await.unwrap();
        assert_eq!(memberships.len(), 2);
        assert_eq!(memberships[0].project_id, Some(3));
        assert_eq!(memberships[0].role, MembershipRole::Owner);
        assert!(!memberships[1].is_active);
    }

    #[tokio::test]
    async fn test_for_user_hits_nested_path() {
        let client = signed_in_client(&serve(backend()).await);
        let memberships = client.memberships().for_user(7).await.unwrap();
        assert_eq!(memberships[0].user_id, Some(7));
        assert_eq!(memberships[0].membership_id, None);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let client = signed_in_client(&serve(backend()).await);
        let membership = client.memberships().get(12).await.unwrap();
        assert_eq!(membership.membership_id, Some(12));
    }

    #[tokio::test]
    async fn test_signed_out_is_unauthorized() {
        let client = anonymous_client(&serve(backend()).await);
        let err = client.memberships().for_project(3).await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected_by_backend() {
        let client = signed_in_client(&serve(backend()).await);
        client.session().set_session("expired", 7, "Ana", "ana@example.com");
        let err = client.memberships().get(12).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.status, Some(401));
    }
}
