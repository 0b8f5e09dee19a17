use serde::{Deserialize, Serialize};

use super::id;

wire_enum! {
    pub enum TaskStatus {
        Todo => "todo",
        InProgress => "in_progress",
        Review => "review",
        Done => "done",
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl TaskStatus {
    /// Counted as pending on the dashboard.
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskStatus::Todo | TaskStatus::InProgress)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Review => "In review",
            TaskStatus::Done => "Done",
            TaskStatus::Other(raw) => raw,
        }
    }
}

/// A task as returned by the task endpoints.
///
/// Create and update responses carry no `task_id`/`project_id`; those decode
/// as `0` until the next reload replaces the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub task_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "id::deserialize")]
    pub project_id: i64,
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub assigned_to: Option<i64>,
    /// Not sent by every backend build.
    #[serde(default, deserialize_with = "id::option::deserialize")]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    pub project_status: Option<String>,
}

impl Task {
    /// The calendar date part of `due_date` (`YYYY-MM-DD`), if any.
    pub fn due_day(&self) -> Option<&str> {
        let due = self.due_date.as_deref()?.trim();
        if due.is_empty() {
            return None;
        }
        Some(due.split(['T', ' ']).next().unwrap_or(due))
    }
}

/// Body for `POST /tasks/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: String,
    pub project_id: i64,
    pub assigned_to: Option<i64>,
}

/// Body for `PUT /tasks/{id}`; unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

impl TaskUpdate {
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = &self.status {
            task.status = status.clone();
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = Some(due_date.clone());
        }
        if let Some(assigned_to) = self.assigned_to {
            task.assigned_to = Some(assigned_to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_without_ids() {
        let task: Task = serde_json::from_str(
            r#"{"title": "Draft copy", "description": "Write the landing page copy",
                "status": "TODO", "due_date": "2030-01-15T09:30:00"}"#,
        )
        .unwrap();
        assert_eq!(task.task_id, 0);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.due_day(), Some("2030-01-15"));
        assert_eq!(task.assigned_to, None);
    }

    #[test]
    fn test_task_response_without_creator() {
        let task: Task = serde_json::from_str(
            r#"{"title": "Copy", "description": "Write the copy", "status": "review",
                "due_date": null, "task_id": 4, "project_id": 1, "assigned_to": 7}"#,
        )
        .unwrap();
        assert_eq!(task.task_id, 4);
        assert_eq!(task.project_id, 1);
        assert_eq!(task.assigned_to, Some(7));
        assert_eq!(task.created_by, None);
        assert_eq!(task.due_day(), None);
    }

    #[test]
    fn test_pending_and_done() {
        assert!(TaskStatus::Todo.is_pending());
        assert!(TaskStatus::InProgress.is_pending());
        assert!(!TaskStatus::Review.is_pending());
        assert!(TaskStatus::Done.is_done());
        assert!(!TaskStatus::Other("done-ish".into()).is_done());
    }
}
