//! The HTTP core shared by every resource.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ClientConfig, SessionContext};

use crate::error::ApiError;
use crate::resources::{AuthApi, CommentsApi, MembershipsApi, ProjectsApi, TasksApi, UsersApi};

/// How a request is authenticated.
#[derive(Clone, Debug)]
pub(crate) enum Credentials {
    /// Bearer token from the session; fails with `Unauthorized` when signed out.
    Session,
    /// An explicit token not yet written to the session.
    Bearer(String),
    Anonymous,
}

/// HTTP client for the project/task backend.
///
/// Cheap to clone: the connection pool and the session handle are shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionContext) -> Self {
        Self::with_base_url(config.base_url(), session)
    }

    pub fn with_base_url(base_url: &str, session: SessionContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    pub fn memberships(&self) -> MembershipsApi<'_> {
        MembershipsApi::new(self)
    }

    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the bearer token as `credentials` demands.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        credentials: Credentials,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        let builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match credentials {
            Credentials::Session => {
                let token = self.session.token().ok_or_else(ApiError::not_signed_in)?;
                Ok(builder.bearer_auth(token))
            }
            Credentials::Bearer(token) => Ok(builder.bearer_auth(token)),
            Credentials::Anonymous => Ok(builder),
        }
    }

    /// Send and turn any non-success status into an [`ApiError`].
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("request failed before a response: {}", e);
            ApiError::network(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), "request rejected: {}", err);
        Err(err)
    }

    /// Send and decode a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::decode(status, e))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(status, "failed to decode response body: {}", e);
            ApiError::decode(status, e)
        })
    }

    /// Send and discard the body (e.g. `204 No Content`).
    pub(crate) async fn fetch_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await.map(|_| ())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path, Credentials::Session)?;
        self.fetch(builder).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path, Credentials::Session)?.query(query);
        self.fetch(builder).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path, Credentials::Session)?.json(body);
        self.fetch(builder).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path, Credentials::Session)?.json(body);
        self.fetch(builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path, Credentials::Session)?;
        self.fetch_empty(builder).await
    }
}
