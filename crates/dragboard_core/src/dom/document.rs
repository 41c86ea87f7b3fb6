//! Template mounting over an in-memory document.
//!
//! # Responsibility
//! - Hold named templates and the live element tree.
//! - Clone a template into a host container at its start or end.
//!
//! # Invariants
//! - Mounted elements never share nodes with their template.
//! - A failed mount leaves the tree untouched.

use crate::dom::element::{find_by_id, render_outline, Element, ElementHandle};
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub const PROJECT_INPUT_TEMPLATE: &str = "project-input";
pub const PROJECT_LIST_TEMPLATE: &str = "project-list";
pub const SINGLE_PROJECT_TEMPLATE: &str = "single-project";

/// Where a mounted element lands among the host's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Start,
    End,
}

/// Mount failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    UnknownTemplate(String),
    UnknownHost(String),
    /// The mounted template lacks an element the caller fills in.
    MissingElement { template: String, tag: String },
}

impl Display for MountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTemplate(id) => write!(f, "template not found: {id}"),
            Self::UnknownHost(id) => write!(f, "host element not found: {id}"),
            Self::MissingElement { template, tag } => {
                write!(f, "template {template} has no <{tag}> element")
            }
        }
    }
}

impl Error for MountError {}

/// Render primitive consumed by board components.
pub trait Mount {
    /// Clones `template_id` and inserts the copy into `host_id`.
    fn mount(
        &self,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
    ) -> Result<ElementHandle, MountError>;
}

/// In-memory document with a single host container under its root.
pub struct Document {
    templates: RefCell<BTreeMap<String, Element>>,
    root: ElementHandle,
}

impl Document {
    /// Creates an empty document whose root holds one `div#host_id`.
    pub fn new(host_id: &str) -> Self {
        let root = Element::new("body")
            .with_child(Element::new("div").with_id(host_id))
            .into_handle();
        Self {
            templates: RefCell::new(BTreeMap::new()),
            root,
        }
    }

    /// Creates a document preloaded with the board templates.
    pub fn with_default_templates(host_id: &str) -> Self {
        let document = Self::new(host_id);
        document.register_template(PROJECT_INPUT_TEMPLATE, project_input_template());
        document.register_template(PROJECT_LIST_TEMPLATE, project_list_template());
        document.register_template(SINGLE_PROJECT_TEMPLATE, single_project_template());
        document
    }

    /// Registers or replaces one template.
    pub fn register_template(&self, template_id: &str, content: Element) {
        self.templates
            .borrow_mut()
            .insert(template_id.to_string(), content);
    }

    pub fn root(&self) -> ElementHandle {
        Rc::clone(&self.root)
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        find_by_id(&self.root, id)
    }

    /// Indented outline of the whole tree.
    pub fn render_text(&self) -> String {
        render_outline(&self.root)
    }
}

impl Mount for Document {
    fn mount(
        &self,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
    ) -> Result<ElementHandle, MountError> {
        let element = self
            .templates
            .borrow()
            .get(template_id)
            .map(Element::deep_clone)
            .ok_or_else(|| MountError::UnknownTemplate(template_id.to_string()))?
            .into_handle();
        let host = self
            .element_by_id(host_id)
            .ok_or_else(|| MountError::UnknownHost(host_id.to_string()))?;

        let mut host = host.borrow_mut();
        match position {
            InsertPosition::Start => host.children.insert(0, Rc::clone(&element)),
            InsertPosition::End => host.children.push(Rc::clone(&element)),
        }
        debug!(
            "event=mount module=dom status=ok template={} host={} children={}",
            template_id,
            host_id,
            host.children.len()
        );
        Ok(element)
    }
}

fn project_input_template() -> Element {
    let field = |id: &str, label: &str, control: &str| {
        let mut label_el = Element::new("label").with_attribute("for", id);
        label_el.text = Some(label.to_string());
        Element::new("div")
            .with_child(label_el)
            .with_child(Element::new(control).with_id(id).with_attribute("value", ""))
    };
    let mut submit = Element::new("button").with_attribute("type", "submit");
    submit.text = Some("ADD PROJECT".to_string());
    Element::new("form")
        .with_child(field("title", "Title", "input"))
        .with_child(field("description", "Description", "textarea"))
        .with_child(field("people", "People", "input"))
        .with_child(submit)
}

fn project_list_template() -> Element {
    Element::new("section")
        .with_child(Element::new("header").with_child(Element::new("h2")))
        .with_child(Element::new("ul"))
}

fn single_project_template() -> Element {
    Element::new("li")
        .with_attribute("draggable", "true")
        .with_child(Element::new("h2"))
        .with_child(Element::new("h3"))
        .with_child(Element::new("p"))
}

#[cfg(test)]
mod tests {
    use super::{
        Document, InsertPosition, Mount, MountError, PROJECT_LIST_TEMPLATE,
        SINGLE_PROJECT_TEMPLATE,
    };

    #[test]
    fn mount_respects_insert_position() {
        let document = Document::with_default_templates("app");
        let end = document
            .mount(PROJECT_LIST_TEMPLATE, "app", InsertPosition::End)
            .unwrap();
        let start = document
            .mount(SINGLE_PROJECT_TEMPLATE, "app", InsertPosition::Start)
            .unwrap();
        end.borrow_mut().id = Some("end".to_string());
        start.borrow_mut().id = Some("start".to_string());

        let host = document.element_by_id("app").unwrap();
        let ids: Vec<_> = host
            .borrow()
            .children
            .iter()
            .map(|child| child.borrow().id.clone())
            .collect();
        assert_eq!(ids, vec![Some("start".to_string()), Some("end".to_string())]);
    }

    #[test]
    fn mount_reports_unknown_template_and_host() {
        let document = Document::with_default_templates("app");
        assert_eq!(
            document.mount("nope", "app", InsertPosition::End).unwrap_err(),
            MountError::UnknownTemplate("nope".to_string())
        );
        assert_eq!(
            document
                .mount(PROJECT_LIST_TEMPLATE, "nowhere", InsertPosition::End)
                .unwrap_err(),
            MountError::UnknownHost("nowhere".to_string())
        );
        assert!(document.element_by_id("app").unwrap().borrow().children.is_empty());
    }
}
