//! # Dashboard refresh pattern
//!
//! Every mutation on the dashboard runs the same three steps:
//!
//! 1. call the API;
//! 2. on success, apply a local [`Patch`] and publish it as
//!    [`DashboardEffect::Optimistic`];
//! 3. re-fetch the whole dashboard and publish [`DashboardEffect::Reloaded`]
//!    (or [`DashboardEffect::ReloadFailed`]).
//!
//! The patch is always published before the reload, and the reload replaces
//! it wholesale. Counters are derived from the task list on every read and
//! never stored.

use std::future::Future;

use api::{ApiClient, ApiError, Project, ProjectUpdate, Task, TaskUpdate};

/// The signed-in user's projects and tasks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Tasks in `todo` or `in_progress`.
    pub pending: usize,
    pub completed: usize,
    pub active_projects: usize,
}

impl DashboardState {
    pub fn stats(&self) -> Stats {
        Stats {
            pending: self.tasks.iter().filter(|t| t.status.is_pending()).count(),
            completed: self.tasks.iter().filter(|t| t.status.is_done()).count(),
            active_projects: self
                .projects
                .iter()
                .filter(|p| p.status == api::ProjectStatus::Active)
                .count(),
        }
    }

    /// Title of a project in the list, for labelling tasks.
    pub fn project_title(&self, project_id: i64) -> Option<&str> {
        self.projects
            .iter()
            .find(|p| p.project_id == project_id)
            .map(|p| p.title.as_str())
    }

    /// Whether `user_id` may edit or delete `task`, falling back to the
    /// owner of the task's project when the record carries no creator.
    pub fn can_manage_task(&self, task: &Task, user_id: i64) -> bool {
        let owner = self
            .projects
            .iter()
            .find(|p| p.project_id == task.project_id)
            .map(|p| p.owner_id);
        can_manage_task(task, user_id, owner)
    }

    pub fn apply(&mut self, patch: &Patch) {
        match patch {
            Patch::ProjectCreated(project) => self.projects.push(project.clone()),
            Patch::ProjectUpdated(id, update) => {
                if let Some(project) = self.projects.iter_mut().find(|p| p.project_id == *id) {
                    update.apply_to(project);
                }
            }
            Patch::ProjectDeleted(id) => {
                self.projects.retain(|p| p.project_id != *id);
                self.tasks.retain(|t| t.project_id != *id);
            }
            Patch::TaskCreated(task) => self.tasks.push(task.clone()),
            Patch::TaskUpdated(id, update) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.task_id == *id) {
                    update.apply_to(task);
                }
            }
            Patch::TaskDeleted(id) => self.tasks.retain(|t| t.task_id != *id),
            Patch::MemberAdded { .. } => {}
        }
    }

    pub fn patched(&self, patch: &Patch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}

/// Task responses from the backend omit `created_by`; without it the owner
/// of the task's project decides.
pub fn can_manage_task(task: &Task, user_id: i64, project_owner: Option<i64>) -> bool {
    match task.created_by {
        Some(creator) => creator == user_id,
        None => project_owner == Some(user_id),
    }
}

/// The local effect of a successful mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    ProjectCreated(Project),
    ProjectUpdated(i64, ProjectUpdate),
    ProjectDeleted(i64),
    TaskCreated(Task),
    TaskUpdated(i64, TaskUpdate),
    TaskDeleted(i64),
    /// Project lists carry no members, so this only triggers the reload.
    MemberAdded { project_id: i64, user_id: i64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEffect {
    Optimistic(DashboardState),
    Reloaded(DashboardState),
    ReloadFailed(ApiError),
}

/// Where the dashboard is loaded from.
#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    async fn load(&self, user_id: i64) -> Result<DashboardState, ApiError>;
}

impl DashboardSource for ApiClient {
    /// Projects and tasks are fetched concurrently; either failure fails both.
    async fn load(&self, user_id: i64) -> Result<DashboardState, ApiError> {
        let projects = self.projects();
        let tasks = self.tasks();
        let (projects, tasks) = futures::try_join!(projects.for_user(user_id, None), tasks.for_user(user_id))?;
        Ok(DashboardState { projects, tasks })
    }
}

/// Run one mutation through the optimistic-then-reload sequence.
///
/// A failed mutation publishes nothing and is returned as is. On success the
/// applied patch is returned so the caller can settle any open form.
pub async fn run_mutation<S, M>(
    source: &S,
    user_id: i64,
    current: &DashboardState,
    mutation: M,
    mut publish: impl FnMut(DashboardEffect),
) -> Result<Patch, ApiError>
where
    S: DashboardSource,
    M: Future<Output = Result<Patch, ApiError>>,
{
    let patch = mutation.await?;
    publish(DashboardEffect::Optimistic(current.patched(&patch)));
    match source.load(user_id).await {
        Ok(state) => publish(DashboardEffect::Reloaded(state)),
        Err(err) => {
            tracing::warn!("dashboard reload failed: {}", err);
            publish(DashboardEffect::ReloadFailed(err));
        }
    }
    Ok(patch)
}

/// Which inline edit forms are open. At most one per entity type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InlineEdit {
    pub project: Option<i64>,
    pub task: Option<i64>,
}

impl InlineEdit {
    /// Opening a form replaces any other open form of the same type.
    pub fn open_project(&mut self, project_id: i64) {
        self.project = Some(project_id);
    }

    pub fn open_task(&mut self, task_id: i64) {
        self.task = Some(task_id);
    }

    pub fn close_project(&mut self) {
        self.project = None;
    }

    pub fn close_task(&mut self) {
        self.task = None;
    }

    pub fn is_editing_project(&self, project_id: i64) -> bool {
        self.project == Some(project_id)
    }

    pub fn is_editing_task(&self, task_id: i64) -> bool {
        self.task == Some(task_id)
    }

    /// Close the form belonging to the entity a successful mutation touched.
    pub fn settle(&mut self, patch: &Patch) {
        match patch {
            Patch::ProjectUpdated(id, _) | Patch::ProjectDeleted(id) if self.is_editing_project(*id) => {
                self.close_project()
            }
            Patch::TaskUpdated(id, _) | Patch::TaskDeleted(id) if self.is_editing_task(*id) => self.close_task(),
            _ => {}
        }
    }
}
