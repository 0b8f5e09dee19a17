//! # Session model
//!
//! A [`Session`] is the client's proof of being signed in: the bearer token
//! issued by the backend plus the identity it was issued for. It is written
//! once on login and read on every protected render.
//!
//! ## Persisted keys
//!
//! | Key | Field |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | `token` |
//! | [`USER_ID_KEY`] (`"userId"`) | `user_id` (decimal string) |
//! | [`USER_NAME_KEY`] (`"userName"`) | `user_name` |
//! | [`USER_EMAIL_KEY`] (`"userEmail"`) | `user_email` |
//!
//! The keys are stored individually so that the browser's storage inspector
//! shows the same layout the backend team expects, but a session is only
//! ever reconstructed when both the token and the user id are present.

use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Every key owned by the session, in write order.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USER_ID_KEY, USER_NAME_KEY, USER_EMAIL_KEY];

/// A complete signed-in session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        user_id: i64,
        user_name: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            user_name: user_name.into(),
            user_email: user_email.into(),
        }
    }

    /// Name to greet the user with, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.user_name.trim().is_empty() {
            &self.user_email
        } else {
            &self.user_name
        }
    }
}
