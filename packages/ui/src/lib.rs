//! Shared UI for TaskDesk: the platform-neutral client logic and the form
//! components the web pages are built from.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`guard`] | Authorized/unauthorized decision for protected routes |
//! | [`triage`] | Turning an [`api::ApiError`] into a redirect or display text |
//! | [`detail`] | Project and task detail loads, and who may manage a task |
//! | [`dashboard`] | Dashboard state, counters and the optimistic-then-reload mutation sequence |
//! | [`forms`] | Client-side validation for every form |
//! | [`membership`] | Which users can still be added to a project |

use dioxus::prelude::*;

pub mod dashboard;
pub mod detail;
pub mod forms;
pub mod guard;
pub mod membership;
pub mod triage;

#[cfg(test)]
mod test_support;

mod confirm;
pub use confirm::confirm;

mod context;
pub use context::{use_api, use_api_provider, use_current_session};

mod field;
pub use field::{field_error, FormMessage};

mod login;
pub use login::{sign_in, sign_out};

mod navbar;
pub use navbar::{LogoutButton, Navbar};

mod project_form;
pub use project_form::{CreateProjectForm, EditProjectForm};

mod task_form;
pub use task_form::{CreateTaskForm, EditTaskForm};

mod add_member;
pub use add_member::AddMemberForm;

mod comment_form;
pub use comment_form::CommentForm;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
