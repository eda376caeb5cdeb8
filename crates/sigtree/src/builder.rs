use std::path::Path;

use sigtree_document::{Document, NodeId, WriteError};
use tracing::{debug, error, info, warn};

use crate::config::BuilderConfig;
use crate::error::StoreError;
use crate::signal::{
    AnalogProcessor, DigitalProcessor, SerialProcessor, SignalItem, SignalProcessor,
    SignedAnalogProcessor,
};

/// Writes addressed values into a document and saves it as XML.
///
/// The builder owns its document. It has no internal locking: hosts that
/// write from several threads must guard the whole builder themselves.
#[derive(Debug, Clone)]
pub struct Builder {
    document: Document,
    delimiter: char,
    xml: sigtree_xml::Config,
    replaced_mismatched_root: bool,
}

impl Builder {
    /// Creates a builder over a fresh document.
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            document: Document::new(config.root_element()),
            delimiter: config.delimiter(),
            xml: sigtree_xml::Config::default(),
            replaced_mismatched_root: false,
        }
    }

    /// Creates a builder over an existing document.
    ///
    /// A document whose root is not named `config.root_element()` is discarded
    /// and replaced by a fresh one; see [`Builder::replaced_mismatched_root`].
    pub fn with_document(config: &BuilderConfig, document: Document) -> Self {
        if document.root_name() == config.root_element() {
            return Self {
                document,
                ..Self::new(config)
            };
        }
        warn!(
            expected = config.root_element(),
            found = document.root_name(),
            "root element does not match, starting a new document"
        );
        Self {
            replaced_mismatched_root: true,
            ..Self::new(config)
        }
    }

    /// Opens the document at `path`, or starts a fresh one if no file exists.
    pub fn open(config: &BuilderConfig, path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "no existing document, starting fresh");
            return Ok(Self::new(config));
        }
        let document = sigtree_xml::load(path).map_err(|source| StoreError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_document(config, document))
    }

    /// Overrides the XML output settings used by [`Builder::save`].
    pub fn with_xml_config(mut self, xml: sigtree_xml::Config) -> Self {
        self.xml = xml;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Whether a supplied document was dropped because of its root name.
    pub fn replaced_mismatched_root(&self) -> bool {
        self.replaced_mismatched_root
    }

    /// Writes `value` at `path`, returning the element that received it.
    pub fn try_write(&mut self, path: &str, value: &str) -> Result<NodeId, WriteError> {
        self.document.write(path, self.delimiter, value)
    }

    /// Writes `value` at `path`; failures are logged and reported as `false`.
    pub fn write(&mut self, path: &str, value: &str) -> bool {
        match self.try_write(path, value) {
            Ok(_) => true,
            Err(e) => {
                error!(path, value, error = %e, "failed to write value");
                false
            }
        }
    }

    pub fn try_write_element<I: SignalItem + ?Sized>(
        &mut self,
        item: &I,
    ) -> Result<NodeId, WriteError> {
        let path = item.address_path().ok_or(WriteError::NullItem)?;
        let value = item.string_value();
        debug!(path, value = value.as_str(), "writing element");
        self.try_write(path, &value)
    }

    /// Writes one signal; failures are logged and reported as `false`.
    pub fn write_element<I: SignalItem + ?Sized>(&mut self, item: &I) -> bool {
        match self.try_write_element(item) {
            Ok(_) => true,
            Err(e) => {
                error!(
                    path = item.address_path().unwrap_or("<none>"),
                    error = %e,
                    "failed to write element"
                );
                false
            }
        }
    }

    /// Writes every item, continuing past failures.
    ///
    /// Returns `true` only if all items were written.
    pub fn write_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: SignalItem,
    {
        let mut status = true;
        for item in items {
            if !self.write_element(&item) {
                status = false;
            }
        }
        status
    }

    pub fn write_group<V>(&mut self, group: &SignalProcessor<V>) -> bool
    where
        V: core::fmt::Display,
    {
        self.write_all(group.elements())
    }

    pub fn write_groups<V>(&mut self, groups: &[SignalProcessor<V>]) -> bool
    where
        V: core::fmt::Display,
    {
        let mut status = true;
        for group in groups {
            if !self.write_group(group) {
                status = false;
            }
        }
        status
    }

    pub fn write_digitals(&mut self, groups: &[DigitalProcessor]) -> bool {
        self.write_groups(groups)
    }

    pub fn write_analogs(&mut self, groups: &[AnalogProcessor]) -> bool {
        self.write_groups(groups)
    }

    pub fn write_signed_analogs(&mut self, groups: &[SignedAnalogProcessor]) -> bool {
        self.write_groups(groups)
    }

    pub fn write_serials(&mut self, groups: &[SerialProcessor]) -> bool {
        self.write_groups(groups)
    }

    /// Saves the document to `path`.
    ///
    /// A document whose root has no children is never written, so an existing
    /// file is not truncated by a builder that was never filled.
    pub fn try_save(&self, path: &Path) -> Result<(), StoreError> {
        if self.document.is_empty() {
            return Err(StoreError::EmptyDocument {
                path: path.to_path_buf(),
            });
        }
        sigtree_xml::save(&self.document, path, &self.xml).map_err(|source| {
            StoreError::Storage {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Saves the document to `path`; failures are logged and reported as
    /// `false`.
    pub fn save(&self, path: &Path) -> bool {
        match self.try_save(path) {
            Ok(()) => true,
            Err(e @ StoreError::EmptyDocument { .. }) => {
                warn!(error = %e, "ensure the document is built before saving");
                false
            }
            Err(e) => {
                error!(error = %e, "failed to save document");
                false
            }
        }
    }
}
