use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomError {
    #[error("Element not found: #{0}")]
    ElementNotFound(String),
}

type ClickListener = Rc<dyn Fn(&Element)>;

struct Node {
    tag: String,
    id: Option<String>,
    inner_html: RefCell<String>,
    children: RefCell<Vec<Element>>,
    listeners: RefCell<Vec<ClickListener>>,
}

/// Shared handle to a node in a single-threaded element tree.
///
/// Cloning yields another handle to the same node; equality is identity.
#[derive(Clone)]
pub struct Element {
    node: Rc<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self::build(tag.into(), None)
    }

    pub fn with_id(tag: impl Into<String>, id: impl Into<String>) -> Self {
        Self::build(tag.into(), Some(id.into()))
    }

    fn build(tag: String, id: Option<String>) -> Self {
        Self {
            node: Rc::new(Node {
                tag,
                id,
                inner_html: RefCell::new(String::new()),
                children: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.node.id.as_deref()
    }

    pub fn inner_html(&self) -> String {
        self.node.inner_html.borrow().clone()
    }

    pub fn set_inner_html(&self, html: impl Into<String>) {
        *self.node.inner_html.borrow_mut() = html.into();
    }

    pub fn append_child(&self, child: Element) {
        self.node.children.borrow_mut().push(child);
    }

    pub fn add_click_listener(&self, listener: impl Fn(&Element) + 'static) {
        self.node.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Dispatches a click to every listener in registration order.
    pub fn click(&self) {
        // Snapshot so a listener may register further listeners.
        let listeners = self.node.listeners.borrow().clone();
        for listener in listeners {
            listener(self);
        }
    }

    /// Depth-first search of this subtree, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.id() == Some(id) {
            return Some(self.clone());
        }
        self.node
            .children
            .borrow()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.node.tag)
            .field("id", &self.node.id)
            .field("inner_html", &*self.node.inner_html.borrow())
            .finish()
    }
}

/// Root of an element tree.
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.body.find_by_id(id)
    }

    /// Supports `#id` selectors only.
    pub fn query_selector(&self, selector: &str) -> Option<Element> {
        selector
            .strip_prefix('#')
            .and_then(|id| self.get_element_by_id(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
