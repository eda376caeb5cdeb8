use core::fmt::{self, Display};

use thiserror::Error;

use crate::name::{NameError, validate_name};

/// One delimiter-separated unit of an address path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Bare element name, e.g. `Devices`.
    Simple { name: &'a str },
    /// Element name with an inline attribute discriminator, e.g. `Light id="5"`.
    Complex {
        name: &'a str,
        attr_name: &'a str,
        attr_value: &'a str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("missing `=` between attribute name and value")]
    MissingDiscriminator,
    #[error("invalid element name: {0}")]
    ElementName(NameError),
    #[error("invalid attribute name: {0}")]
    AttributeName(NameError),
}

impl<'a> Segment<'a> {
    /// Parses a raw segment.
    ///
    /// A segment containing a space is complex: the part before the first space
    /// is the element name, the remainder is split on its first `=` into the
    /// attribute name and value. Quotes and spaces around the value are
    /// stripped. Names are validated but never case-folded here.
    pub fn parse(segment: &'a str) -> Result<Self, SegmentError> {
        let Some((name, rest)) = segment.split_once(' ') else {
            let name = validate_name(segment).map_err(SegmentError::ElementName)?;
            return Ok(Segment::Simple { name });
        };
        let name = validate_name(name).map_err(SegmentError::ElementName)?;
        let (attr_name, attr_value) = rest
            .split_once('=')
            .ok_or(SegmentError::MissingDiscriminator)?;
        let attr_name = validate_name(attr_name.trim_matches(' '))
            .map_err(SegmentError::AttributeName)?;
        let attr_value = attr_value.trim_matches(|c: char| c == ' ' || c == '"' || c == '\'');
        Ok(Segment::Complex {
            name,
            attr_name,
            attr_value,
        })
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Segment::Simple { name } | Segment::Complex { name, .. } => name,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Segment::Complex { .. })
    }
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Simple { name } => write!(f, "{name}"),
            Segment::Complex {
                name,
                attr_name,
                attr_value,
            } => write!(f, "{name} {attr_name}=\"{attr_value}\""),
        }
    }
}
