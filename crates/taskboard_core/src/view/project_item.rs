//! Single project card, the drag source.

use crate::drag::protocol::Draggable;
use crate::drag::transfer::{DataTransfer, DropEffect, PROJECT_ID_MEDIA_TYPE};
use crate::model::project::Project;
use crate::view::component::Component;
use log::debug;

/// Render data for one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItemView {
    /// Element id, equal to the project id.
    pub id: String,
    pub title: String,
    /// Member line, e.g. `3 people assigned`.
    pub assigned: String,
    pub description: String,
}

/// Card wrapping one project snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }
}

impl Component for ProjectItem {
    type View = ProjectItemView;

    fn render_content(&self) -> ProjectItemView {
        ProjectItemView {
            id: self.project.id.to_string(),
            title: self.project.title.clone(),
            assigned: format!("{} assigned", self.project.people_label()),
            description: self.project.description.clone(),
        }
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, self.project.id.as_str());
        transfer.set_effect_allowed(DropEffect::Move);
        debug!(
            "event=drag_start module=drag status=ok id={}",
            self.project.id
        );
    }

    fn drag_end(&self, transfer: &DataTransfer) {
        debug!(
            "event=drag_end module=drag status=ok id={} effect={}",
            self.project.id,
            transfer.effect_allowed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectItem;
    use crate::drag::protocol::Draggable;
    use crate::drag::transfer::{DataTransfer, DropEffect, PROJECT_ID_MEDIA_TYPE};
    use crate::model::project::Project;
    use crate::view::component::Component;

    #[test]
    fn drag_start_publishes_only_the_id() {
        let project = Project::new("Build API", "Design and implement", 3);
        let item = ProjectItem::new(project.clone());
        let mut transfer = DataTransfer::new();

        item.drag_start(&mut transfer);

        assert_eq!(transfer.types().collect::<Vec<_>>(), vec![PROJECT_ID_MEDIA_TYPE]);
        assert_eq!(
            transfer.get_data(PROJECT_ID_MEDIA_TYPE),
            Some(project.id.as_str())
        );
        assert_eq!(transfer.effect_allowed(), DropEffect::Move);
    }

    #[test]
    fn drag_end_leaves_payload_untouched() {
        let item = ProjectItem::new(Project::new("t", "description", 2));
        let mut transfer = DataTransfer::new();
        item.drag_start(&mut transfer);
        let before = transfer.clone();

        item.drag_end(&transfer);
        assert_eq!(transfer, before);
    }

    #[test]
    fn renders_member_line() {
        let view = ProjectItem::new(Project::new("Solo", "one person job", 1)).render_content();
        assert_eq!(view.assigned, "1 person assigned");
        assert_eq!(view.title, "Solo");
    }
}
