//! In-process stub backend for client tests.

use axum::Router;
use store::{MemoryStore, SessionContext};

use crate::ApiClient;

pub(crate) const TOKEN: &str = "good-token";

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub(crate) fn anonymous_client(base_url: &str) -> ApiClient {
    ApiClient::with_base_url(base_url, SessionContext::new(MemoryStore::new()))
}

pub(crate) fn signed_in_client(base_url: &str) -> ApiClient {
    let session = SessionContext::new(MemoryStore::new());
    session.set_session(TOKEN, 7, "Ana", "ana@example.com");
    ApiClient::with_base_url(base_url, session)
}

/// True when the request carries the stub's bearer token.
pub(crate) fn authorized(headers: &axum::http::HeaderMap) -> bool {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer good-token")
}
