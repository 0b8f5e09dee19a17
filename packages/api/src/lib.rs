//! # API crate — HTTP client for the project/task backend
//!
//! Every backend operation the client performs is one `async fn` here, grouped
//! by resource behind an accessor on [`ApiClient`]:
//!
//! | Accessor | Resource | Operations |
//! |----------|----------|------------|
//! | [`ApiClient::auth`] | `/auth`, `POST /users/` | `login`, `register`, `identify` |
//! | [`ApiClient::users`] | `/users` | `list`, `get`, `update`, `delete` |
//! | [`ApiClient::projects`] | `/projects` | CRUD, `for_user`, `add_member`, `members` |
//! | [`ApiClient::tasks`] | `/tasks` | CRUD, `for_project`, `for_user` |
//! | [`ApiClient::memberships`] | `/memberships` | CRUD, `for_user`, `for_project` |
//! | [`ApiClient::comments`] | `/comments` | CRUD, `for_user`, `for_project` |
//!
//! All calls except login and registration read the token from the injected
//! [`store::SessionContext`] and send it as `Authorization: Bearer <token>`.
//! Failures come back as one normalized [`ApiError`]; the client never clears
//! the session itself on a 401, it only reports [`ErrorKind::Unauthorized`].

mod client;
pub mod error;
pub mod models;
mod resources;

#[cfg(test)]
mod test_support;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use models::*;
pub use resources::{AuthApi, CommentsApi, MembershipsApi, ProjectsApi, TasksApi, UsersApi};
pub use store::Session;
