use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{User, UserUpdate};

/// `/users`.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/users/").await
    }

    pub async fn get(&self, user_id: i64) -> Result<User, ApiError> {
        self.client.get(&format!("/users/{user_id}")).await
    }

    pub async fn update(&self, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.client.put(&format!("/users/{user_id}"), update).await
    }

    pub async fn delete(&self, user_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/users/{user_id}")).await
    }
}
