/// Output settings for XML serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit the `<?xml version="1.0" encoding="utf-8"?>` declaration.
    pub declaration: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl Config {
    pub fn compact() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }
}
