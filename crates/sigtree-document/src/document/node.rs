use indexmap::IndexMap;

use crate::document::{Document, NodeId};
use crate::name::eq_ignore_case;
use crate::segment::Segment;

/// An element of the document.
///
/// Children are ids into the owning [`Document`], so this does not implement
/// PartialEq; compare documents instead.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    attributes: IndexMap<String, String>,
    pub(crate) children: Vec<NodeId>,
    text: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Position of the attribute whose name matches case-insensitively.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes
            .keys()
            .position(|key| eq_ignore_case(key, name))
    }

    /// Looks up an attribute value, ignoring the case of the name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let index = self.attribute_index(name)?;
        self.attributes
            .get_index(index)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute value.
    ///
    /// An existing attribute matching case-insensitively keeps its position and
    /// spelling and only has its value replaced; otherwise the attribute is
    /// appended.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        match self.attribute_index(name) {
            Some(index) => {
                if let Some((_, slot)) = self.attributes.get_index_mut(index) {
                    *slot = value.into();
                }
            }
            None => {
                self.attributes.insert(name.to_string(), value.into());
            }
        }
    }

    /// Replaces the text of this element. Children are left untouched.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = Some(value.into());
    }

    /// Whether this element is addressed by `segment`.
    ///
    /// A complex segment additionally requires exactly one attribute matching
    /// both its name and value. All comparisons ignore case.
    pub fn matches(&self, segment: &Segment<'_>) -> bool {
        match segment {
            Segment::Simple { name } => eq_ignore_case(&self.name, name),
            Segment::Complex {
                name,
                attr_name,
                attr_value,
            } => {
                eq_ignore_case(&self.name, name)
                    && self
                        .attributes
                        .iter()
                        .filter(|(key, value)| {
                            eq_ignore_case(key, attr_name) && eq_ignore_case(value, attr_value)
                        })
                        .count()
                        == 1
            }
        }
    }
}

/// A mutable handle to one node of a [`Document`].
pub struct NodeMut<'d> {
    document: &'d mut Document,
    pub node_id: NodeId,
}

impl core::fmt::Debug for NodeMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.document.get_node(self.node_id) {
            Some(node) => f
                .debug_tuple("NodeMut")
                .field(&self.node_id)
                .field(node)
                .finish(),
            None => f
                .debug_tuple("NodeMut")
                .field(&self.node_id)
                .field(&"<invalid>")
                .finish(),
        }
    }
}

impl<'d> NodeMut<'d> {
    pub fn new(document: &'d mut Document, node_id: NodeId) -> Self {
        Self { document, node_id }
    }

    pub fn with_attribute(self, name: &str, value: impl Into<String>) -> Self {
        self.document.node_mut(self.node_id).set_attribute(name, value);
        self
    }

    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.document.node_mut(self.node_id).set_text(value);
        self
    }

    /// Appends a new child element and returns a handle to it.
    pub fn add_child(self, name: impl Into<String>) -> NodeMut<'d> {
        self.document.add_child(self.node_id, name)
    }

    pub fn as_node(&self) -> &Node {
        self.document.node(self.node_id)
    }
}
