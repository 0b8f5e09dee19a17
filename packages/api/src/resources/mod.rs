//! One accessor per backend resource, each borrowing the [`ApiClient`].
//!
//! ```ignore
//! let projects = client.projects().for_user(user_id, None).await?;
//! ```
//!
//! [`ApiClient`]: crate::ApiClient

mod auth;
mod comments;
mod memberships;
mod projects;
mod tasks;
mod users;

pub use auth::AuthApi;
pub use comments::CommentsApi;
pub use memberships::MembershipsApi;
pub use projects::ProjectsApi;
pub use tasks::TasksApi;
pub use users::UsersApi;

use serde::Serialize;

/// Optional `?status=` filter used by the scoped listing endpoints.
#[derive(Serialize)]
pub(crate) struct StatusFilter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
}
