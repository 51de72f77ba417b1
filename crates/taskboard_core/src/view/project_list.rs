//! Status-filtered project list, the drop target.
//!
//! # Invariants
//! - A list only ever holds projects whose status equals its own.
//! - The assigned projects are replaced wholesale on each store notification.
//! - The droppable flag is set by an accepted hover and cleared by leave or
//!   drop.
//! - A list subscribes to the store at most once; later `configure` calls
//!   are ignored.

use crate::drag::protocol::{carries_project_id, project_id_payload, DragOverDecision, DragTarget};
use crate::drag::transfer::DataTransfer;
use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::ProjectStore;
use crate::view::component::Component;
use crate::view::project_item::{ProjectItem, ProjectItemView};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;

/// Render data for one list column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListView {
    /// Section element id, e.g. `active-projects`.
    pub element_id: String,
    /// Inner list id, e.g. `active-project-list`.
    pub list_id: String,
    pub heading: &'static str,
    /// Whether the drop highlight should be shown.
    pub droppable: bool,
    pub items: Vec<ProjectItemView>,
}

pub struct ProjectList {
    status: ProjectStatus,
    assigned: Rc<RefCell<Vec<Project>>>,
    droppable: bool,
    configured: bool,
}

impl ProjectList {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Rc::new(RefCell::new(Vec::new())),
            droppable: false,
            configured: false,
        }
    }

    /// Status this list displays and assigns on drop.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Projects received from the latest store notification.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    /// Draggable cards for the assigned projects.
    pub fn items(&self) -> Vec<ProjectItem> {
        self.assigned
            .borrow()
            .iter()
            .cloned()
            .map(ProjectItem::new)
            .collect()
    }
}

impl Component for ProjectList {
    type View = ProjectListView;

    fn configure(&mut self, store: &mut ProjectStore) {
        if self.configured {
            debug!(
                "event=list_configure module=view status=skip list={} reason=already_configured",
                self.status
            );
            return;
        }
        self.configured = true;
        let status = self.status;
        let assigned = Rc::clone(&self.assigned);
        store.add_listener(move |projects| {
            let relevant: Vec<Project> = projects
                .into_iter()
                .filter(|project| project.status == status)
                .collect();
            *assigned.borrow_mut() = relevant;
        });
    }

    fn render_content(&self) -> ProjectListView {
        let name = self.status.as_str();
        ProjectListView {
            element_id: format!("{name}-projects"),
            list_id: format!("{name}-project-list"),
            heading: self.status.label(),
            droppable: self.droppable,
            items: self.items().iter().map(|item| item.render_content()).collect(),
        }
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&mut self, transfer: &DataTransfer) -> DragOverDecision {
        if !carries_project_id(transfer) {
            return DragOverDecision::Reject;
        }
        if !self.droppable {
            debug!(
                "event=drag_over module=drag status=ok list={}",
                self.status
            );
        }
        self.droppable = true;
        DragOverDecision::Accept
    }

    fn drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore) {
        self.droppable = false;
        let Some(project_id) = project_id_payload(transfer) else {
            debug!(
                "event=drop module=drag status=skip list={} reason=missing_payload",
                self.status
            );
            return;
        };
        let moved = store.move_project(project_id, self.status);
        info!(
            "event=drop module=drag status={} list={} id={}",
            if moved { "ok" } else { "skip" },
            self.status,
            project_id
        );
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
        debug!(
            "event=drag_leave module=drag status=ok list={}",
            self.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectList;
    use crate::drag::protocol::{DragOverDecision, DragTarget};
    use crate::drag::transfer::{DataTransfer, PROJECT_ID_MEDIA_TYPE};
    use crate::model::project::ProjectStatus;
    use crate::store::project_store::ProjectStore;
    use crate::view::component::Component;

    fn payload(id: &str) -> DataTransfer {
        let mut transfer = DataTransfer::new();
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, id);
        transfer
    }

    #[test]
    fn render_uses_status_ids_and_heading() {
        let view = ProjectList::new(ProjectStatus::Finished).render_content();
        assert_eq!(view.element_id, "finished-projects");
        assert_eq!(view.list_id, "finished-project-list");
        assert_eq!(view.heading, "FINISHED PROJECTS");
        assert!(view.items.is_empty());
    }

    #[test]
    fn drag_over_rejects_foreign_payload() {
        let mut list = ProjectList::new(ProjectStatus::Active);
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<p>nope</p>");

        assert_eq!(list.drag_over(&transfer), DragOverDecision::Reject);
        assert!(!list.is_droppable());
    }

    #[test]
    fn hover_then_leave_toggles_affordance() {
        let mut list = ProjectList::new(ProjectStatus::Active);
        assert!(list.drag_over(&payload("x")).is_accept());
        assert!(list.is_droppable());

        list.drag_leave();
        assert!(!list.is_droppable());
    }

    #[test]
    fn listener_filters_by_status() {
        let mut store = ProjectStore::new();
        let mut active = ProjectList::new(ProjectStatus::Active);
        active.configure(&mut store);

        let id = store.add_project("Build API", "Design and implement", 3);
        assert_eq!(active.assigned_projects().len(), 1);

        let mut finished = ProjectList::new(ProjectStatus::Finished);
        finished.configure(&mut store);
        finished.drop(&payload(id.as_str()), &mut store);

        assert!(active.assigned_projects().is_empty());
        assert_eq!(finished.assigned_projects()[0].id, id);
    }

    #[test]
    fn drop_without_payload_is_ignored() {
        let mut store = ProjectStore::new();
        store.add_project("Build API", "Design and implement", 3);
        let mut list = ProjectList::new(ProjectStatus::Finished);

        list.drop(&DataTransfer::new(), &mut store);
        assert!(store.projects()[0].is_active());
    }

    #[test]
    fn configure_twice_subscribes_once() {
        let mut store = ProjectStore::new();
        let mut list = ProjectList::new(ProjectStatus::Active);
        list.configure(&mut store);
        list.configure(&mut store);

        assert_eq!(store.listener_count(), 1);
        store.add_project("Build API", "Design and implement", 3);
        assert_eq!(list.assigned_projects().len(), 1);
    }
}
