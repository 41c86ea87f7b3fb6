//! Card rendering one project; the drag source of the board.

use crate::dnd::payload::DragPayload;
use crate::dnd::transfer::DragEvent;
use crate::dnd::DragSource;
use crate::dom::document::SINGLE_PROJECT_TEMPLATE;
use crate::dom::element::{first_by_tag, ElementHandle};
use crate::dom::{InsertPosition, Mount, MountError};
use crate::model::project::Project;
use log::debug;

/// Rendered copy of one project.
///
/// Holds a snapshot taken at render time; it is discarded on the next
/// re-render of its view.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    project: Project,
    element: ElementHandle,
}

impl ProjectCard {
    /// Mounts a card at the end of `host_id` and fills in its content.
    pub fn mount(mount: &dyn Mount, host_id: &str, project: Project) -> Result<Self, MountError> {
        let element = mount.mount(SINGLE_PROJECT_TEMPLATE, host_id, InsertPosition::End)?;
        element.borrow_mut().id = Some(project.id.to_string());
        let card = Self { project, element };
        card.render();
        Ok(card)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn element(&self) -> &ElementHandle {
        &self.element
    }

    fn render(&self) {
        let texts = [
            ("h2", self.project.title.clone()),
            ("h3", format!("{} assigned", self.project.people_label())),
            ("p", self.project.description.clone()),
        ];
        for (tag, text) in texts {
            if let Some(node) = first_by_tag(&self.element, tag) {
                node.borrow_mut().text = Some(text);
            }
        }
    }
}

impl DragSource for ProjectCard {
    fn on_drag_start(&self, event: &mut DragEvent<'_>) {
        DragPayload::ProjectId(self.project.id).encode(event.data_transfer_mut());
        debug!(
            "event=card_drag_start module=view status=ok project_id={}",
            self.project.id
        );
    }

    fn on_drag_end(&self, _event: &mut DragEvent<'_>) {
        debug!(
            "event=card_drag_end module=view status=ok project_id={}",
            self.project.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectCard;
    use crate::dnd::payload::DragPayload;
    use crate::dnd::transfer::{DataTransfer, DragEvent, DropEffect};
    use crate::dnd::DragSource;
    use crate::dom::element::{first_by_tag, text_content};
    use crate::dom::Document;
    use crate::model::project::Project;

    #[test]
    fn card_renders_title_people_and_description() {
        let document = Document::with_default_templates("app");
        let project = Project::new("Solo", "One person job", 1);
        let card = ProjectCard::mount(&document, "app", project.clone()).unwrap();

        let element = card.element();
        assert_eq!(element.borrow().id, Some(project.id.to_string()));
        let h3 = first_by_tag(element, "h3").unwrap();
        assert_eq!(text_content(&h3), "1 person assigned");
        assert_eq!(
            text_content(element),
            "Solo1 person assignedOne person job"
        );
    }

    #[test]
    fn drag_start_encodes_id_with_move_effect() {
        let document = Document::with_default_templates("app");
        let project = Project::new("Crew", "Team job", 4);
        let card = ProjectCard::mount(&document, "app", project.clone()).unwrap();

        let mut transfer = DataTransfer::new();
        card.on_drag_start(&mut DragEvent::new(&mut transfer));
        assert_eq!(
            DragPayload::decode(&transfer),
            Ok(DragPayload::ProjectId(project.id))
        );
        assert_eq!(transfer.effect_allowed(), DropEffect::Move);
    }
}
