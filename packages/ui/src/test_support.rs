//! Stub backend shared by the client-logic tests.

use api::ApiClient;
use axum::Router;
use store::{MemoryStore, SessionContext};

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

/// Signed in as user 7.
pub(crate) fn signed_in_client(base_url: &str) -> ApiClient {
    let session = SessionContext::new(MemoryStore::new());
    session.set_session("good-token", 7, "Ana", "ana@example.com");
    ApiClient::with_base_url(base_url, session)
}

pub(crate) async fn server_error() -> (axum::http::StatusCode, &'static str) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"detail": "database unavailable"}"#,
    )
}
