//! Document abstraction consumed by the page behaviors.
//!
//! A [`Document`] is an element tree addressed through opaque [`NodeId`] handles. The
//! behaviors never hold element references across calls, only ids, so the same code runs
//! over the in-memory [`MemoryDocument`](crate::MemoryDocument) and any host binding.

use std::fmt;

/// Opaque handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Element lookups used by the page behaviors.
///
/// `Display` renders the equivalent CSS selector, which is what skip reasons and logs show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// `#id`
    Id(&'a str),
    /// `.class`
    Class(&'a str),
    /// `.class tag`: `tag` elements anywhere below an element carrying `class`.
    Within { class: &'a str, tag: &'a str },
    /// `a[href^="prefix"]`
    LinkHrefPrefix(&'a str),
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Within { class, tag } => write!(f, ".{class} {tag}"),
            Self::LinkHrefPrefix(prefix) => write!(f, "a[href^=\"{prefix}\"]"),
        }
    }
}

/// Element tree with the mutation surface the behaviors need.
///
/// Queries return elements attached to the document, in document order. Inline style
/// values are plain strings; setting an empty value removes the property.
pub trait Document {
    fn body(&self) -> NodeId;

    fn query_all(&self, query: Query<'_>) -> Vec<NodeId>;

    fn query(&self, query: Query<'_>) -> Option<NodeId> {
        self.query_all(query).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(Query::Id(id))
    }

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Moves `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Moves `child` to the front of `parent`'s children.
    fn prepend_child(&mut self, parent: NodeId, child: NodeId);

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Lowercase tag name.
    fn tag_name(&self, node: NodeId) -> String;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    /// Concatenated text of the element and its descendants.
    fn text(&self, node: NodeId) -> String;

    /// Replaces the element's children with a single text run.
    fn set_text(&mut self, node: NodeId, text: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Distance from the top of the document to the element's top edge.
    fn offset_top(&self, node: NodeId) -> f64;

    fn offset_height(&self, node: NodeId) -> f64;

    fn set_styles(&mut self, node: NodeId, styles: &[(&str, &str)]) {
        for (property, value) in styles {
            self.set_style(node, property, value);
        }
    }

    /// Siblings after `node`, nearest first.
    fn following_siblings(&self, node: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.parent(node) else {
            return Vec::new();
        };
        self.children(parent).into_iter().skip_while(|&sibling| sibling != node).skip(1).collect()
    }

    /// Nearest `<a href>` at or above `node`.
    fn enclosing_link(&self, node: NodeId) -> Option<(NodeId, String)> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if self.tag_name(candidate) == "a"
                && let Some(href) = self.attribute(candidate, "href")
            {
                return Some((candidate, href));
            }
            current = self.parent(candidate);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_render_as_selectors() {
        assert_eq!(Query::Id("backToTop").to_string(), "#backToTop");
        assert_eq!(Query::Class("header").to_string(), ".header");
        assert_eq!(
            Query::Within { class: "table-of-contents", tag: "a" }.to_string(),
            ".table-of-contents a"
        );
        assert_eq!(Query::LinkHrefPrefix("mailto:").to_string(), "a[href^=\"mailto:\"]");
    }
}
