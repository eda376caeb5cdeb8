use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML syntax error at position {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("Invalid UTF-8 in {0}")]
    Utf8(&'static str),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Element <{0}> found after the root element")]
    MultipleRoots(String),

    #[error("Unexpected end of input inside <{0}>")]
    UnexpectedEof(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
