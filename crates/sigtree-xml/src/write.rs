use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sigtree_document::{Document, NodeId};

use crate::{Config, XmlError};

fn write_err(e: impl core::fmt::Display) -> XmlError {
    XmlError::Write(e.to_string())
}

/// Serializes the subtree rooted at `node_id` into `out`.
pub fn node_to_writer<W: Write>(
    doc: &Document,
    node_id: NodeId,
    out: W,
    config: &Config,
) -> Result<(), XmlError> {
    let mut writer = match config.indent {
        Some(width) => Writer::new_with_indent(out, b' ', width),
        None => Writer::new(out),
    };
    if config.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(write_err)?;
    }
    write_element(&mut writer, doc, node_id)?;
    // Trailing newline for files.
    if config.indent.is_some() {
        writer.get_mut().write_all(b"\n")?;
    }
    Ok(())
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    doc: &Document,
    node_id: NodeId,
) -> Result<(), XmlError> {
    let node = doc
        .get_node(node_id)
        .ok_or_else(|| XmlError::Write(format!("node {node_id:?} is not in the document")))?;

    let mut start = BytesStart::new(node.name());
    for (name, value) in node.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.text().is_none() && !node.has_children() {
        writer.write_event(Event::Empty(start)).map_err(write_err)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(write_err)?;
    // Text goes first and is written even when empty, so `Some("")` becomes
    // `<A></A>` rather than `<A/>`. Next to children, whitespace-only text
    // would be indistinguishable from indentation, so it goes out as CDATA.
    if let Some(text) = node.text() {
        let event = if node.has_children() && text.trim().is_empty() {
            Event::CData(BytesCData::new(text))
        } else {
            Event::Text(BytesText::new(text))
        };
        writer.write_event(event).map_err(write_err)?;
    }
    for &child in node.children() {
        write_element(writer, doc, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name())))
        .map_err(write_err)?;
    Ok(())
}
