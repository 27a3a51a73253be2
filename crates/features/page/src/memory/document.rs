use crate::dom::{Document, NodeId, Query};
use fxhash::FxHashMap;

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: FxHashMap<String, String>,
    classes: Vec<String>,
    styles: FxHashMap<String, String>,
    text: String,
    top: f64,
    height: f64,
}

/// Arena-backed element tree rooted at `<html><body>`.
///
/// Layout is explicit: each element carries the `top`/`height` the test or host assigns
/// through [`ElementBuilder::layout`] or [`MemoryDocument::set_layout`].
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    root: NodeId,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self { elements: Vec::new(), root: NodeId::new(0), body: NodeId::new(0) };
        let root = document.create_element("html");
        let body = document.create_element("body");
        document.append_child(root, body);
        document.root = root;
        document.body = body;
        document
    }

    /// Starts a new element; finish with [`ElementBuilder::append_to`].
    pub fn element(&mut self, tag: &str) -> ElementBuilder<'_> {
        let node = self.create_element(tag);
        ElementBuilder { document: self, node }
    }

    pub fn set_layout(&mut self, node: NodeId, top: f64, height: f64) {
        if let Some(element) = self.get_mut(node) {
            element.top = top;
            element.height = height;
        }
    }

    /// Whether `node` is reachable from the document root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == self.root {
                return true;
            }
            current = self.get(candidate).and_then(|e| e.parent);
        }
        false
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.index())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.index())
    }

    fn detach(&mut self, child: NodeId) {
        let parent = self.get_mut(child).and_then(|e| e.parent.take());
        if let Some(parent) = parent.and_then(|p| self.get_mut(p)) {
            parent.children.retain(|&c| c != child);
        }
    }

    fn can_adopt(&self, parent: NodeId, child: NodeId) -> bool {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return false;
        }
        // A node cannot become its own ancestor.
        let mut current = Some(parent);
        while let Some(candidate) = current {
            if candidate == child {
                return false;
            }
            current = self.get(candidate).and_then(|e| e.parent);
        }
        true
    }

    fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            order.push(node);
            if let Some(element) = self.get(node) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        order
    }

    fn has_ancestor_with_class(&self, node: NodeId, class: &str) -> bool {
        let mut current = self.get(node).and_then(|e| e.parent);
        while let Some(candidate) = current {
            if self.has_class(candidate, class) {
                return true;
            }
            current = self.get(candidate).and_then(|e| e.parent);
        }
        false
    }

    fn matches(&self, node: NodeId, query: Query<'_>) -> bool {
        let Some(element) = self.get(node) else {
            return false;
        };
        match query {
            Query::Id(id) => element.attributes.get("id").is_some_and(|v| v == id),
            Query::Class(class) => element.classes.iter().any(|c| c == class),
            Query::Within { class, tag } => {
                element.tag == tag && self.has_ancestor_with_class(node, class)
            },
            Query::LinkHrefPrefix(prefix) => {
                element.tag == "a"
                    && element.attributes.get("href").is_some_and(|href| href.starts_with(prefix))
            },
        }
    }
}

impl Document for MemoryDocument {
    fn body(&self) -> NodeId {
        self.body
    }

    fn query_all(&self, query: Query<'_>) -> Vec<NodeId> {
        self.preorder().into_iter().filter(|&node| self.matches(node, query)).collect()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let node = NodeId::new(self.elements.len());
        self.elements.push(Element { tag: tag.to_ascii_lowercase(), ..Element::default() });
        node
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.can_adopt(parent, child) {
            return;
        }
        self.detach(child);
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.get_mut(parent) {
            element.children.push(child);
        }
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.can_adopt(parent, child) {
            return;
        }
        self.detach(child);
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.get_mut(parent) {
            element.children.insert(0, child);
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|e| e.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node).map(|e| e.children.clone()).unwrap_or_default()
    }

    fn tag_name(&self, node: NodeId) -> String {
        self.get(node).map(|e| e.tag.clone()).unwrap_or_default()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let element = self.get(node)?;
        if name == "class" {
            return (!element.classes.is_empty()).then(|| element.classes.join(" "));
        }
        element.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(element) = self.get_mut(node) else {
            return;
        };
        if name == "class" {
            element.classes = value.split_whitespace().map(str::to_owned).collect();
        } else {
            element.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let Some(element) = self.get_mut(node) else {
            return;
        };
        if name == "class" {
            element.classes.clear();
        } else {
            element.attributes.remove(name);
        }
    }

    fn text(&self, node: NodeId) -> String {
        let Some(element) = self.get(node) else {
            return String::new();
        };
        let mut text = element.text.clone();
        for &child in &element.children {
            text.push_str(&self.text(child));
        }
        text
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        for child in self.children(node) {
            self.detach(child);
        }
        if let Some(element) = self.get_mut(node) {
            text.clone_into(&mut element.text);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node)
            && !element.classes.iter().any(|c| c == class)
        {
            element.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.get(node)?.styles.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let Some(element) = self.get_mut(node) else {
            return;
        };
        if value.is_empty() {
            element.styles.remove(property);
        } else {
            element.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.get(node).map_or(0.0, |e| e.top)
    }

    fn offset_height(&self, node: NodeId) -> f64 {
        self.get(node).map_or(0.0, |e| e.height)
    }
}

/// Fluent element construction for [`MemoryDocument`].
///
/// ```rust
/// use policy_page::{Document, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// let body = doc.body();
/// let header = doc.element("div").class("header").append_to(body);
/// assert!(doc.has_class(header, "header"));
/// ```
#[derive(Debug)]
pub struct ElementBuilder<'a> {
    document: &'a mut MemoryDocument,
    node: NodeId,
}

impl ElementBuilder<'_> {
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.document.add_class(self.node, class);
        self
    }

    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.document.set_attribute(self.node, name, value);
        self
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.document.set_text(self.node, text);
        self
    }

    #[must_use]
    pub fn layout(self, top: f64, height: f64) -> Self {
        self.document.set_layout(self.node, top, height);
        self
    }

    pub fn append_to(self, parent: NodeId) -> NodeId {
        self.document.append_child(parent, self.node);
        self.node
    }

    /// Leaves the element detached.
    #[must_use]
    pub const fn finish(self) -> NodeId {
        self.node
    }
}
