use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NAME_PARSER: LazyLock<NameParser> = LazyLock::new(NameParser::init);

/// Validates element and attribute names.
///
/// Accepted names start with an XID_Start character or underscore and continue
/// with XID_Continue characters, hyphens or dots. Colons are rejected since
/// namespaces are never interpreted.
pub struct NameParser(Regex);

impl NameParser {
    /// Compiles the underlying regex, so don't call this in a hot path.
    /// Prefer [`validate_name`].
    pub fn init() -> Self {
        Self(Regex::new(r"^[\p{XID_Start}_][\p{XID_Continue}\-.]*").unwrap())
    }

    pub fn validate<'a>(&self, s: &'a str) -> Result<&'a str, NameError> {
        let Some(matches) = self.0.find(s) else {
            return match s.chars().next() {
                Some(c) => Err(NameError::InvalidChar {
                    at: 0,
                    invalid_char: c,
                }),
                None => Err(NameError::Empty),
            };
        };
        if matches.len() == s.len() {
            return Ok(s);
        }
        // matches.end() is a byte index; report a character index instead.
        let at = matches.as_str().chars().count();
        match s[matches.end()..].chars().next() {
            Some(invalid_char) => Err(NameError::InvalidChar { at, invalid_char }),
            None => Ok(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Empty name")]
    Empty,
    #[error("Invalid character for name: {invalid_char:?} at {at}")]
    InvalidChar {
        /// character index of the problem in the name
        at: usize,
        invalid_char: char,
    },
}

/// Checks that `s` can be used as an element or attribute name.
pub fn validate_name(s: &str) -> Result<&str, NameError> {
    NAME_PARSER.validate(s)
}

/// Case-insensitive name/value comparison used by every structural match.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}
