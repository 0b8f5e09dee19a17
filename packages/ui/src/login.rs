//! Sign-in flow shared by the login page.

use api::{ApiClient, ApiError};
use store::Session;

/// Log in and write the complete session in one store.
///
/// When the login body carries no `user_id`, the account is looked up by
/// email with the fresh token before anything is persisted, so a failed
/// lookup leaves the session untouched.
pub async fn sign_in(api: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    let email = email.trim();
    let login = api.auth().login(email, password).await?;

    let (user_id, user_name) = match login.user_id {
        Some(user_id) => (user_id, login.name.clone()),
        None => {
            let user = api
                .auth()
                .identify(&login.access_token, email)
                .await?
                .ok_or_else(|| ApiError::decode(200, "no account matches the signed-in email"))?;
            (user.user_id, login.name.clone().or(Some(user.name)))
        }
    };

    let user_name = user_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| email.to_string());
    let session = api
        .session()
        .set_session(&login.access_token, user_id, &user_name, email);
    tracing::info!(user_id, "signed in");
    Ok(session)
}

/// Drop the stored session.
pub fn sign_out(api: &ApiClient) {
    api.session().clear();
    tracing::info!("signed out");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Form, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::test_support::{anonymous_client, serve};
    use crate::triage::login_message;

    async fn login(Form(form): Form<HashMap<String, String>>) -> Response {
        match (form["username"].as_str(), form["password"].as_str()) {
            ("ana@example.com", "Secret#123") => Json(json!({
                "access_token": "t-ana", "token_type": "bearer", "user_id": "7", "name": "Ana"
            }))
            .into_response(),
            ("old@example.com", "Secret#123") => {
                Json(json!({"access_token": "t-old", "token_type": "bearer"})).into_response()
            }
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Credenciales incorrectas"})),
            )
                .into_response(),
        }
    }

    async fn users() -> Json<serde_json::Value> {
        Json(json!([
            {"user_id": 3, "name": "Old Timer", "email": "OLD@example.com", "role": "user"}
        ]))
    }

    async fn client() -> ApiClient {
        let router = Router::new()
            .route("/auth/login", post(login))
            .route("/users/", get(users));
        anonymous_client(&serve(router).await)
    }

    #[tokio::test]
    async fn test_sign_in_writes_full_session() {
        let api = client().await;
        let session = sign_in(&api, " ana@example.com ", "Secret#123").await.unwrap();
        assert_eq!(session.user_id, 7);

        let stored = api.session().current().unwrap();
        assert_eq!(stored.token, "t-ana");
        assert_eq!(stored.user_id, 7);
        assert_eq!(stored.user_name, "Ana");
        assert_eq!(stored.user_email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_wrong_credentials_leave_session_unset() {
        let api = client().await;
        let err = sign_in(&api, "ana@example.com", "nope").await.unwrap_err();
        assert_eq!(login_message(&err), "Incorrect email or password");
        assert!(api.session().token().is_none());
        assert!(api.session().user_id().is_none());
    }

    #[tokio::test]
    async fn test_missing_user_id_resolved_by_email() {
        let api = client().await;
        let session = sign_in(&api, "old@example.com", "Secret#123").await.unwrap();
        assert_eq!(session.user_id, 3);
        assert_eq!(session.user_name, "Old Timer");
        assert_eq!(api.session().token().as_deref(), Some("t-old"));
    }

    #[tokio::test]
    async fn test_sign_out() {
        let api = client().await;
        sign_in(&api, "ana@example.com", "Secret#123").await.unwrap();
        sign_out(&api);
        assert!(!api.session().is_authorized());
    }
}
