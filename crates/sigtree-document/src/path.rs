use crate::document::WriteError;
use crate::name::validate_name;
use crate::segment::{Segment, SegmentError};

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '/';

/// Where the value of a write ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The value replaces the text of the resolved element.
    ElementText,
    /// The last segment names an attribute on the resolved element.
    Attribute,
}

/// An address path split on its delimiter, with the terminal write decided.
///
/// Classification happens on the raw segments before anything touches the
/// tree, because it decides how many segments are walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPath<'a> {
    segments: Vec<&'a str>,
    terminal: Terminal,
    walk_count: usize,
}

impl<'a> ClassifiedPath<'a> {
    /// Splits `path` on `delimiter` and classifies its final segment.
    ///
    /// - trailing delimiter: element text, the empty marker segment is not walked
    /// - final segment containing `=`: element text, every segment is walked
    /// - otherwise: attribute, every segment but the last is walked
    ///
    /// An empty path is a trailing delimiter on its own and addresses the text
    /// of the root.
    pub fn classify(path: &'a str, delimiter: char) -> Result<Self, WriteError> {
        let segments: Vec<&'a str> = path.split(delimiter).collect();
        let Some(last) = segments.last() else {
            return Err(WriteError::MalformedPath {
                path: path.to_string(),
            });
        };
        let (terminal, walk_count) = if last.is_empty() {
            (Terminal::ElementText, segments.len() - 1)
        } else if last.contains('=') {
            (Terminal::ElementText, segments.len())
        } else {
            (Terminal::Attribute, segments.len() - 1)
        };
        Ok(Self {
            segments,
            terminal,
            walk_count,
        })
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    pub fn walk_count(&self) -> usize {
        self.walk_count
    }

    /// The raw segments that participate in tree walking.
    pub fn walk_segments(&self) -> &[&'a str] {
        &self.segments[..self.walk_count]
    }

    pub fn last_segment(&self) -> &'a str {
        self.segments.last().copied().unwrap_or_default()
    }

    /// Parses every walked segment, failing on the first malformed one.
    pub fn parse_walk(&self) -> Result<Vec<Segment<'a>>, WriteError> {
        self.walk_segments()
            .iter()
            .map(|&raw| Segment::parse(raw).map_err(|kind| WriteError::malformed(raw, kind)))
            .collect()
    }

    /// The attribute targeted by an attribute write, surrounding spaces removed.
    ///
    /// Returns `None` for element-text writes.
    pub fn attribute_name(&self) -> Result<Option<&'a str>, WriteError> {
        match self.terminal {
            Terminal::ElementText => Ok(None),
            Terminal::Attribute => {
                let raw = self.last_segment();
                validate_name(raw.trim_matches(' '))
                    .map(Some)
                    .map_err(|e| WriteError::malformed(raw, SegmentError::AttributeName(e)))
            }
        }
    }
}
