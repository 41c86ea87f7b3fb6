//! Element tree used as the render surface.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Shared handle to one live element.
pub type ElementHandle = Rc<RefCell<Element>>;

/// Minimal element node: tag, id, classes, attributes, text and children.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<ElementHandle>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child.into_handle());
        self
    }

    pub fn into_handle(self) -> ElementHandle {
        Rc::new(RefCell::new(self))
    }

    /// Copies this element and its whole subtree into fresh handles.
    pub fn deep_clone(&self) -> Element {
        Element {
            tag: self.tag.clone(),
            id: self.id.clone(),
            classes: self.classes.clone(),
            attributes: self.attributes.clone(),
            text: self.text.clone(),
            children: self
                .children
                .iter()
                .map(|child| child.borrow().deep_clone().into_handle())
                .collect(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Depth-first search for the element carrying `id`, including `root` itself.
pub fn find_by_id(root: &ElementHandle, id: &str) -> Option<ElementHandle> {
    if root.borrow().id.as_deref() == Some(id) {
        return Some(Rc::clone(root));
    }
    let children = root.borrow().children.clone();
    children.iter().find_map(|child| find_by_id(child, id))
}

/// Depth-first search for the first descendant with `tag`, excluding `root`.
pub fn first_by_tag(root: &ElementHandle, tag: &str) -> Option<ElementHandle> {
    let children = root.borrow().children.clone();
    for child in &children {
        if child.borrow().tag == tag {
            return Some(Rc::clone(child));
        }
        if let Some(found) = first_by_tag(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Collects the text of an element and all its descendants, in document order.
pub fn text_content(root: &ElementHandle) -> String {
    let element = root.borrow();
    let mut out = element.text.clone().unwrap_or_default();
    for child in &element.children {
        out.push_str(&text_content(child));
    }
    out
}

/// Renders an indented outline of the subtree, one element per line.
pub fn render_outline(root: &ElementHandle) -> String {
    let mut out = String::new();
    write_outline(root, 0, &mut out);
    out
}

fn write_outline(node: &ElementHandle, depth: usize, out: &mut String) {
    let element = node.borrow();
    out.push_str(&"  ".repeat(depth));
    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = &element.id {
        out.push_str(&format!(" #{id}"));
    }
    for class in &element.classes {
        out.push_str(&format!(" .{class}"));
    }
    for (name, value) in &element.attributes {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    out.push('>');
    if let Some(text) = &element.text {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
    for child in &element.children {
        write_outline(child, depth + 1, out);
    }
}
