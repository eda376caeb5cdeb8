use std::path::PathBuf;

use sigtree_xml::XmlError;
use thiserror::Error;

/// Failures of the persistence side of a [`Builder`](crate::Builder).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The root has no child elements; saving would truncate the target.
    #[error("Refusing to save an empty document to {}", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("Failed to save {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: XmlError,
    },
}
