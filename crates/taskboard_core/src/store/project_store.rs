//! Authoritative in-memory project store.
//!
//! # Responsibility
//! - Own the ordered project sequence and every mutation applied to it.
//! - Fan out a fresh snapshot to all listeners after each mutation.
//!
//! # Invariants
//! - Insertion order is preserved; status changes never reorder.
//! - Listeners only ever see owned copies, never the internal sequence.
//! - Moving an unknown id changes nothing and notifies nobody.
//! - Mutation takes `&mut self`, so a listener cannot re-enter the store
//!   while it is being notified.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::listeners::ListenerRegistry;
use log::{debug, info};

/// Single source of truth for board projects.
///
/// Construct exactly one per running board and hand it to the views that
/// need it.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: ListenerRegistry<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active project and notifies listeners.
    ///
    /// Returns the generated id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok id={} total={}",
            id,
            self.projects.len()
        );
        self.update_listeners();
        id
    }

    /// Sets the status of the project with `project_id`.
    ///
    /// Unknown ids are ignored without notifying listeners. Returns whether a
    /// project matched.
    pub fn move_project(&mut self, project_id: &str, new_status: ProjectStatus) -> bool {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == *project_id)
        else {
            debug!(
                "event=project_move_skipped module=store status=skip id={} reason=not_found",
                project_id
            );
            return false;
        };

        let previous = project.status;
        project.status = new_status;
        info!(
            "event=project_moved module=store status=ok id={} from={} to={}",
            project_id, previous, new_status
        );
        self.update_listeners();
        true
    }

    /// Registers a listener for every future mutation.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.add(listener);
        debug!(
            "event=listener_added module=store status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Borrowed view of all projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Owned copy of all projects in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == *project_id)
    }

    /// Projects with `status`, in insertion order.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update_listeners(&mut self) {
        self.listeners.notify(&self.projects);
        debug!(
            "event=listeners_notified module=store status=ok listeners={}",
            self.listeners.len()
        );
    }
}
