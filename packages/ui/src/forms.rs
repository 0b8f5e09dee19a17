//! Client-side form validation.
//!
//! Every form keeps its raw input as strings and turns it into a request body
//! through `validate`, which either yields the body or the per-field errors.
//! [`submit`] never calls the backend with an invalid draft.

use std::collections::BTreeMap;
use std::future::Future;

use api::{
    ApiError, MembershipRole, NewComment, NewMembership, NewProject, NewTask, NewUser,
    ProjectStatus, ProjectUpdate, TaskStatus, TaskUpdate, UserRole,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Field name to message.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq)]
pub enum FormError {
    Invalid(FieldErrors),
    Api(ApiError),
}

impl From<ApiError> for FormError {
    fn from(err: ApiError) -> Self {
        FormError::Api(err)
    }
}

/// Send a validated draft. Invalid drafts never reach `send`.
pub async fn submit<T, R, F, Fut>(draft: Result<T, FieldErrors>, send: F) -> Result<R, FormError>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let body = draft.map_err(FormError::Invalid)?;
    Ok(send(body).await?)
}

fn check_len(errors: &mut FieldErrors, field: &'static str, label: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.insert(field, format!("{label} must be between {min} and {max} characters"));
    }
}

fn finish<T>(errors: FieldErrors, body: impl FnOnce() -> T) -> Result<T, FieldErrors> {
    if errors.is_empty() {
        Ok(body())
    } else {
        Err(errors)
    }
}

/// Parse a `date` or `datetime-local` input value.
pub fn parse_due_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

fn format_due_date(due: NaiveDateTime) -> String {
    due.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Project create and edit forms share the same rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl ProjectDraft {
    pub fn from_project(project: &api::Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            status: project.status.as_str().to_string(),
        }
    }

    fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_len(&mut errors, "title", "Title", self.title.trim(), 3, 100);
        check_len(&mut errors, "description", "Description", self.description.trim(), 10, 1000);
        errors
    }

    fn status(&self) -> ProjectStatus {
        if self.status.trim().is_empty() {
            ProjectStatus::default()
        } else {
            ProjectStatus::from(self.status.as_str())
        }
    }

    pub fn validate(&self, owner_id: i64) -> Result<NewProject, FieldErrors> {
        finish(self.check(), || NewProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status(),
            owner_id,
        })
    }

    pub fn validate_update(&self) -> Result<ProjectUpdate, FieldErrors> {
        finish(self.check(), || ProjectUpdate {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
    pub project_id: String,
}

impl TaskDraft {
    pub fn from_task(task: &api::Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            due_date: task
                .due_date
                .as_deref()
                .and_then(parse_due_date)
                .map(|due| due.format("%Y-%m-%dT%H:%M").to_string())
                .unwrap_or_default(),
            project_id: task.project_id.to_string(),
        }
    }

    fn check_text(&self, errors: &mut FieldErrors) {
        check_len(errors, "title", "Title", self.title.trim(), 3, 100);
        check_len(errors, "description", "Description", self.description.trim(), 10, 500);
    }

    fn status(&self) -> TaskStatus {
        if self.status.trim().is_empty() {
            TaskStatus::default()
        } else {
            TaskStatus::from(self.status.as_str())
        }
    }

    /// A new task is assigned to `assignee` and must be due strictly after `now`.
    pub fn validate(&self, assignee: i64, now: NaiveDateTime) -> Result<NewTask, FieldErrors> {
        let mut errors = FieldErrors::new();
        self.check_text(&mut errors);

        let project_id = api::models::parse_id(&self.project_id);
        if project_id.is_none() {
            errors.insert("project_id", "Select a project".to_string());
        }

        let due = if self.due_date.trim().is_empty() {
            errors.insert("due_date", "Due date is required".to_string());
            None
        } else {
            match parse_due_date(&self.due_date) {
                Some(due) if due > now => Some(due),
                Some(_) => {
                    errors.insert("due_date", "Due date must be in the future".to_string());
                    None
                }
                None => {
                    errors.insert("due_date", "Due date is not a valid date".to_string());
                    None
                }
            }
        };

        match (project_id, due) {
            (Some(project_id), Some(due)) if errors.is_empty() => Ok(NewTask {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                status: self.status(),
                due_date: format_due_date(due),
                project_id,
                assigned_to: Some(assignee),
            }),
            _ => Err(errors),
        }
    }

    /// Edits keep the existing project and may leave the due date blank.
    pub fn validate_update(&self) -> Result<TaskUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        self.check_text(&mut errors);
        let due = if self.due_date.trim().is_empty() {
            None
        } else {
            let parsed = parse_due_date(&self.due_date);
            if parsed.is_none() {
                errors.insert("due_date", "Due date is not a valid date".to_string());
            }
            parsed
        };
        finish(errors, || TaskUpdate {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status()),
            due_date: due.map(format_due_date),
            assigned_to: None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::User.as_str().to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl RegisterDraft {
    pub fn validate(&self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_len(&mut errors, "name", "Name", self.name.trim(), 2, 50);
        if !self.email.contains('@') {
            errors.insert("email", "Enter a valid email address".to_string());
        }
        let role = UserRole::from(self.role.as_str());
        if let UserRole::Other(raw) = &role {
            errors.insert("role", format!("Unknown role: {raw}"));
        }
        check_len(&mut errors, "password", "Password", &self.password, 8, 50);
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match".to_string());
        }
        finish(errors, || NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role,
        })
    }
}

pub fn validate_comment(content: &str, project_id: i64, user_id: i64) -> Result<NewComment, FieldErrors> {
    let mut errors = FieldErrors::new();
    let content = content.trim();
    if content.is_empty() {
        errors.insert("content", "Comment cannot be empty".to_string());
    } else {
        check_len(&mut errors, "content", "Comment", content, 1, 1000);
    }
    finish(errors, || NewComment {
        content: content.to_string(),
        project_id,
        user_id,
    })
}

/// The add-member form needs a selected user.
pub fn validate_member(selected: &str, project_id: i64) -> Result<NewMembership, FieldErrors> {
    match api::models::parse_id(selected) {
        Some(user_id) => Ok(NewMembership {
            user_id,
            project_id,
            role: MembershipRole::Member,
        }),
        None => Err(FieldErrors::from([("user_id", "Select a user to add".to_string())])),
    }
}
