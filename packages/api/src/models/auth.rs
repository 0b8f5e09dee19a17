use serde::{Deserialize, Serialize};

use super::id;

/// Form fields for `POST /auth/login` (OAuth2 password form, so the email
/// travels as `username`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Body returned by a successful login.
///
/// `access_token` is the canonical token field. `user_id` and `name` are
/// expected but optional: older backend builds omit them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}
