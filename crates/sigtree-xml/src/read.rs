use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use sigtree_document::{Document, NodeId};

use crate::XmlError;

/// A run of character data inside an element.
struct Chunk {
    text: String,
    /// CDATA is kept even when it is only whitespace.
    cdata: bool,
}

/// An element that has been opened but not closed yet.
struct Frame {
    id: NodeId,
    name: String,
    chunks: Vec<Chunk>,
    has_children: bool,
}

impl Frame {
    /// Text of the element once it closes.
    ///
    /// Leaf elements keep their text verbatim. Elements with children drop
    /// whitespace-only text chunks, which are indentation; whitespace-only
    /// text of such elements is written as CDATA and survives.
    fn into_text(self) -> Option<String> {
        if !self.has_children {
            return Some(self.chunks.into_iter().map(|chunk| chunk.text).collect());
        }
        let kept: Vec<String> = self
            .chunks
            .into_iter()
            .filter(|chunk| chunk.cdata || !chunk.text.trim().is_empty())
            .map(|chunk| chunk.text)
            .collect();
        (!kept.is_empty()).then(|| kept.concat())
    }
}

fn syntax_error<R>(reader: &Reader<R>, e: impl core::fmt::Display) -> XmlError {
    XmlError::Syntax {
        position: reader.error_position(),
        message: e.to_string(),
    }
}

/// Parses an XML document read from `input`.
///
/// Element names, attributes (in order), child order and text are kept.
/// Declarations, comments, doctypes and processing instructions are skipped.
pub fn from_reader<R: BufRead>(input: R) -> Result<Document, XmlError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut document: Option<Document> = None;
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let frame = open_element(&reader, &mut document, &mut stack, e)?;
                stack.push(frame);
            }
            Ok(Event::Empty(ref e)) => {
                open_element(&reader, &mut document, &mut stack, e)?;
            }
            Ok(Event::End(_)) => {
                let Some(frame) = stack.pop() else {
                    return Err(syntax_error(&reader, "closing tag without an open element"));
                };
                let id = frame.id;
                if let (Some(doc), Some(text)) = (document.as_mut(), frame.into_text()) {
                    doc.node_mut(id).set_text(text);
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|e| syntax_error(&reader, e))?;
                if let Some(frame) = stack.last_mut() {
                    frame.chunks.push(Chunk {
                        text: text.into_owned(),
                        cdata: false,
                    });
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = core::str::from_utf8(e).map_err(|_| XmlError::Utf8("CDATA section"))?;
                if let Some(frame) = stack.last_mut() {
                    frame.chunks.push(Chunk {
                        text: text.to_string(),
                        cdata: true,
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(syntax_error(&reader, e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(frame) = stack.pop() {
        return Err(XmlError::UnexpectedEof(frame.name));
    }
    document.ok_or(XmlError::MissingRoot)
}

/// Parses an XML document from a string.
pub fn from_str(input: &str) -> Result<Document, XmlError> {
    from_reader(input.as_bytes())
}

/// Creates the element for a start (or empty) tag and returns its frame.
fn open_element<R>(
    reader: &Reader<R>,
    document: &mut Option<Document>,
    stack: &mut [Frame],
    e: &BytesStart<'_>,
) -> Result<Frame, XmlError> {
    let name = core::str::from_utf8(e.name().as_ref())
        .map_err(|_| XmlError::Utf8("element name"))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| syntax_error(reader, e))?;
        let key = core::str::from_utf8(attr.key.as_ref())
            .map_err(|_| XmlError::Utf8("attribute name"))?
            .to_string();
        let value = attr.unescape_value().map_err(|e| syntax_error(reader, e))?;
        attributes.push((key, value.into_owned()));
    }

    let id = if let Some(doc) = document.as_mut() {
        let Some(parent) = stack.last_mut() else {
            return Err(XmlError::MultipleRoots(name));
        };
        parent.has_children = true;
        let mut child = doc.add_child(parent.id, name.as_str());
        for (key, value) in attributes {
            child = child.with_attribute(&key, value);
        }
        child.node_id
    } else {
        let mut doc = Document::new(name.as_str());
        let mut root = doc.root_mut();
        for (key, value) in attributes {
            root = root.with_attribute(&key, value);
        }
        let id = root.node_id;
        *document = Some(doc);
        id
    };

    Ok(Frame {
        id,
        name,
        chunks: Vec::new(),
        has_children: false,
    })
}
