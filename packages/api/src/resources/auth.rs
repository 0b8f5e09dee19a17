use reqwest::Method;

use crate::client::{ApiClient, Credentials};
use crate::error::ApiError;
use crate::models::{LoginCredentials, LoginResponse, NewUser, User};

/// `/auth` plus registration. Neither login nor registration sends a token.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`, form-encoded as `username`/`password`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = LoginCredentials {
            username: email.trim().to_string(),
            password: password.to_string(),
        };
        let builder = self
            .client
            .request(Method::POST, "/auth/login", Credentials::Anonymous)?
            .form(&form);
        let response: LoginResponse = self.client.fetch(builder).await?;
        if response.access_token.trim().is_empty() {
            return Err(ApiError::decode(200, "login response carried no access token"));
        }
        if response.user_id.is_none() {
            tracing::warn!("login response carried no user_id");
        }
        Ok(response)
    }

    /// `POST /users/`.
    pub async fn register(&self, user: &NewUser) -> Result<User, ApiError> {
        let builder = self
            .client
            .request(Method::POST, "/users/", Credentials::Anonymous)?
            .json(user);
        self.client.fetch(builder).await
    }

    /// Look up the account behind `token` by email, for login responses that
    /// omitted `user_id`. The token is used directly, not read from the session.
    pub async fn identify(&self, token: &str, email: &str) -> Result<Option<User>, ApiError> {
        let builder = self.client.request(
            Method::GET,
            "/users/",
            Credentials::Bearer(token.to_string()),
        )?;
        let users: Vec<User> = self.client.fetch(builder).await?;
        let email = email.trim();
        Ok(users
            .into_iter()
            .find(|u| u.email.trim().eq_ignore_ascii_case(email)))
    }
}
