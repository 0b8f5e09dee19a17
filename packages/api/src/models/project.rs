use serde::{Deserialize, Serialize};

use super::{id, Task};

wire_enum! {
    pub enum ProjectStatus {
        Active => "active",
        OnHold => "on_hold",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Active
    }
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Other(raw) => raw,
        }
    }
}

/// A project as returned by the list and detail endpoints.
///
/// List endpoints omit `members` and `tasks`; they decode as empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "id::deserialize")]
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(deserialize_with = "id::deserialize")]
    pub owner_id: i64,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}

/// A project's membership record, as embedded in the project detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(deserialize_with = "id::deserialize")]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /projects/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub owner_id: i64,
}

/// Body for `PUT /projects/{id}`; unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectUpdate {
    /// Apply this update to a local copy.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(status) = &self.status {
            project.status = status.clone();
        }
    }
}
