use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Comment, CommentUpdate, NewComment};

/// `/comments`.
pub struct CommentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CommentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        self.client.post("/comments/", comment).await
    }

    pub async fn list(&self) -> Result<Vec<Comment>, ApiError> {
        self.client.get("/comments/").await
    }

    pub async fn get(&self, comment_id: i64) -> Result<Comment, ApiError> {
        self.client.get(&format!("/comments/{comment_id}")).await
    }

    pub async fn update(&self, comment_id: i64, update: &CommentUpdate) -> Result<Comment, ApiError> {
        self.client.put(&format!("/comments/{comment_id}"), update).await
    }

    pub async fn delete(&self, comment_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/comments/{comment_id}")).await
    }

    pub async fn for_project(&self, project_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.client
            .get(&format!("/comments/project/{project_id}/comments"))
            .await
    }

    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.client
            .get(&format!("/comments/user/{user_id}/comments"))
            .await
    }
}
