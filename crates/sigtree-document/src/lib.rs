//! In-memory element tree addressed by delimiter-separated paths.
//!
//! A path such as `Devices/Light id="5"/Brightness/` is split into segments,
//! walked from the document root (reusing or creating elements as it goes) and
//! finally written as element text or as an attribute.

/// Element and attribute name validation.
pub mod name;

/// Parsing of single path segments.
pub mod segment;

/// Splitting and terminal classification of address paths.
pub mod path;

/// The element tree, path resolution and value writes.
pub mod document;

pub use document::node::{Node, NodeMut};
pub use document::{Document, NodeId, WriteError};
pub use path::{ClassifiedPath, DEFAULT_DELIMITER, Terminal};
pub use segment::{Segment, SegmentError};
