use serde::{Deserialize, Serialize};

use super::id;

wire_enum! {
    /// Global account role.
    pub enum UserRole {
        User => "user",
        Admin => "admin",
        Moderator => "moderator",
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl UserRole {
    pub fn label(&self) -> &str {
        match self {
            UserRole::User => "User",
            UserRole::Admin => "Administrator",
            UserRole::Moderator => "Moderator",
            UserRole::Other(raw) => raw,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id::deserialize")]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /users/` (registration).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}
