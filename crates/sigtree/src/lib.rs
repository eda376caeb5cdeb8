//! Persist addressed signal values into an XML document.
//!
//! ```
//! use sigtree::{Builder, BuilderConfig};
//!
//! let mut builder = Builder::new(&BuilderConfig::default());
//! assert!(builder.write(r#"Devices/Light id="5"/Brightness/"#, "80"));
//! assert!(builder.write(r#"Devices/Light id="5"/Power/"#, "On"));
//! assert_eq!(builder.document().len(), 5);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod signal;

pub use builder::Builder;
pub use config::{BuilderConfig, ConfigError, SigtreeConfig};
pub use error::StoreError;
pub use signal::{
    AnalogElement, AnalogProcessor, DigitalElement, DigitalProcessor, SerialElement,
    SerialProcessor, SignalElement, SignalItem, SignalProcessor, SignedAnalogElement,
    SignedAnalogProcessor,
};

pub use sigtree_document as document;
pub use sigtree_xml as xml;
