pub mod node;

use thiserror::Error;
use tracing::debug;

use crate::document::node::{Node, NodeMut};
use crate::path::{ClassifiedPath, Terminal};
use crate::segment::{Segment, SegmentError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// An element tree with exactly one root.
///
/// Nodes live in an arena and are never removed, so a [`NodeId`] handed out by
/// a document stays valid for the lifetime of that document.
#[derive(Debug, Clone)]
pub struct Document {
    root: NodeId,
    nodes: Vec<Node>,
}

#[derive(Debug, PartialEq, Error, Clone)]
pub enum WriteError {
    #[error("Malformed path: {path:?}")]
    MalformedPath { path: String },
    #[error("Malformed segment {segment:?}: {kind}")]
    MalformedSegment { segment: String, kind: SegmentError },
    #[error("Traversal failed at segment {index}: node {node:?} is not in the document")]
    TraversalFailure { index: usize, node: NodeId },
    #[error("Item has no address path")]
    NullItem,
    #[error("Document root is unavailable")]
    DocumentUnavailable,
}

impl WriteError {
    pub(crate) fn malformed(segment: &str, kind: SegmentError) -> Self {
        WriteError::MalformedSegment {
            segment: segment.to_string(),
            kind,
        }
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.nodes_equal(self.root, other, other.root)
    }
}

impl Document {
    /// Compare two subtrees structurally, ignoring NodeId values
    fn nodes_equal(&self, id1: NodeId, other: &Document, id2: NodeId) -> bool {
        let (Some(node1), Some(node2)) = (self.get_node(id1), other.get_node(id2)) else {
            return false;
        };
        if node1.name() != node2.name()
            || node1.text() != node2.text()
            || node1.children().len() != node2.children().len()
        {
            return false;
        }
        // Attribute order is significant.
        if !node1.attributes().iter().eq(node2.attributes().iter()) {
            return false;
        }
        node1
            .children()
            .iter()
            .zip(node2.children())
            .all(|(&c1, &c2)| self.nodes_equal(c1, other, c2))
    }

    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: NodeId(0),
            nodes: vec![Node::new(root_name)],
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root.0]
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root_name(&self) -> &str {
        self.root().name()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of elements in the document, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.root().has_children()
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        let root = self.root;
        NodeMut::new(self, root)
    }

    /// Appends a new element under `parent`.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeMut<'_> {
        self.nodes.push(Node::new(name));
        let node_id = NodeId(self.nodes.len() - 1);
        self.node_mut(parent).children.push(node_id);
        NodeMut::new(self, node_id)
    }

    /// First child of `parent`, in insertion order, addressed by `segment`.
    pub fn find_child(&self, parent: NodeId, segment: &Segment<'_>) -> Option<NodeId> {
        self.get_node(parent)?
            .children()
            .iter()
            .copied()
            .find(|&child| self.get_node(child).is_some_and(|node| node.matches(segment)))
    }

    /// Resolves a path segment to a child node, creating it if necessary.
    ///
    /// Existing children are reused (first match wins). A new child created
    /// for a complex segment carries the discriminating attribute.
    pub fn resolve_child_by_segment(
        &mut self,
        segment: &Segment<'_>,
        parent: NodeId,
    ) -> NodeMut<'_> {
        if let Some(existing) = self.find_child(parent, segment) {
            debug!(%segment, "reusing existing element");
            return NodeMut::new(self, existing);
        }
        debug!(%segment, "creating element");
        let child = self.add_child(parent, segment.name());
        match segment {
            Segment::Simple { .. } => child,
            Segment::Complex {
                attr_name,
                attr_value,
                ..
            } => child.with_attribute(attr_name, *attr_value),
        }
    }

    /// Walks `segments` from `start`, creating missing elements on the way.
    pub fn resolve_path(
        &mut self,
        start: NodeId,
        segments: &[Segment<'_>],
    ) -> Result<NodeId, WriteError> {
        let mut current = start;
        for (index, segment) in segments.iter().enumerate() {
            if self.get_node(current).is_none() {
                return Err(if index == 0 {
                    WriteError::DocumentUnavailable
                } else {
                    WriteError::TraversalFailure {
                        index,
                        node: current,
                    }
                });
            }
            current = self.resolve_child_by_segment(segment, current).node_id;
        }
        Ok(current)
    }

    /// Looks a path up without creating anything.
    ///
    /// Matching follows [`Document::resolve_path`]. For attribute paths the
    /// element carrying the attribute is returned.
    pub fn find_path(&self, path: &str, delimiter: char) -> Result<Option<NodeId>, WriteError> {
        let classified = ClassifiedPath::classify(path, delimiter)?;
        let segments = classified.parse_walk()?;
        let mut current = self.root;
        for segment in &segments {
            match self.find_child(current, segment) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Performs the terminal mutation of a write on the resolved `cursor`.
    pub fn apply_terminal(
        &mut self,
        cursor: NodeId,
        terminal: Terminal,
        last_segment: &str,
        value: &str,
    ) -> Result<(), WriteError> {
        let node = self
            .get_node_mut(cursor)
            .ok_or(WriteError::TraversalFailure {
                index: 0,
                node: cursor,
            })?;
        match terminal {
            Terminal::ElementText => {
                node.set_text(value);
                debug!(element = node.name(), value, "wrote element text");
            }
            Terminal::Attribute => {
                let attribute = last_segment.trim_matches(' ');
                node.set_attribute(attribute, value);
                debug!(element = node.name(), attribute, value, "wrote attribute");
            }
        }
        Ok(())
    }

    /// Writes `value` at `path`, creating elements as needed.
    ///
    /// The whole path is parsed and validated before the tree is touched, so a
    /// failed write leaves the document unchanged. Returns the element that
    /// received the value.
    pub fn write(&mut self, path: &str, delimiter: char, value: &str) -> Result<NodeId, WriteError> {
        let classified = ClassifiedPath::classify(path, delimiter)?;
        let segments = classified.parse_walk()?;
        let attribute = classified.attribute_name()?;
        debug!(
            path,
            walk = segments.len(),
            terminal = ?classified.terminal(),
            "writing path"
        );
        let cursor = self.resolve_path(self.root, &segments)?;
        self.apply_terminal(
            cursor,
            classified.terminal(),
            attribute.unwrap_or(classified.last_segment()),
            value,
        )?;
        Ok(cursor)
    }
}
