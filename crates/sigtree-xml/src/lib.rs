//! XML encoding for sigtree documents.
//!
//! Element names, attribute order, child order and text survive a
//! load/save round trip.

mod config;
mod error;
mod read;
mod write;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

pub use config::Config;
pub use error::XmlError;
pub use read::{from_reader, from_str};
pub use write::node_to_writer;

use sigtree_document::{Document, NodeId};
use tempfile::NamedTempFile;
use tracing::debug;

pub fn to_writer<W: Write>(doc: &Document, out: W, config: &Config) -> Result<(), XmlError> {
    node_to_writer(doc, doc.root_id(), out, config)
}

pub fn to_string(doc: &Document, config: &Config) -> Result<String, XmlError> {
    node_to_string(doc, doc.root_id(), config)
}

/// Serializes a single subtree, e.g. for display.
pub fn node_to_string(doc: &Document, node_id: NodeId, config: &Config) -> Result<String, XmlError> {
    let mut out = Vec::new();
    node_to_writer(doc, node_id, &mut out, config)?;
    String::from_utf8(out).map_err(|_| XmlError::Utf8("serialized document"))
}

/// Reads and parses the XML file at `path`.
pub fn load(path: &Path) -> Result<Document, XmlError> {
    let file = File::open(path)?;
    let doc = from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), nodes = doc.len(), "loaded document");
    Ok(doc)
}

/// Writes the document to `path`.
///
/// The XML is first written to a temporary file next to `path` and then moved
/// over it, so an existing file is either fully replaced or left as it was.
pub fn save(doc: &Document, path: &Path, config: &Config) -> Result<(), XmlError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    to_writer(doc, &mut file, config)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| XmlError::Io(e.error))?;
    debug!(path = %path.display(), nodes = doc.len(), "saved document");
    Ok(())
}
