use core::fmt::Display;

use serde::Deserialize;

/// Anything that can be written into a document: an address and a value
/// rendered as text.
pub trait SignalItem {
    /// The delimited path of this item, `None` if it was never addressed.
    fn address_path(&self) -> Option<&str>;

    fn string_value(&self) -> String;
}

impl<T: SignalItem + ?Sized> SignalItem for &T {
    fn address_path(&self) -> Option<&str> {
        (**self).address_path()
    }

    fn string_value(&self) -> String {
        (**self).string_value()
    }
}

/// A single addressed signal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SignalElement<V> {
    #[serde(rename = "path", default)]
    address: Option<String>,
    value: V,
}

/// On/off signal, written as `true` or `false`.
pub type DigitalElement = SignalElement<bool>;
/// Unsigned 16-bit level.
pub type AnalogElement = SignalElement<u16>;
/// Signed 16-bit level.
pub type SignedAnalogElement = SignalElement<i16>;
/// Free-form text.
pub type SerialElement = SignalElement<String>;

impl<V> SignalElement<V> {
    pub fn new(address: impl Into<String>, value: V) -> Self {
        Self {
            address: Some(address.into()),
            value,
        }
    }

    /// An element whose address has not been assigned yet.
    pub fn unaddressed(value: V) -> Self {
        Self {
            address: None,
            value,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }
}

impl<V: Display> SignalItem for SignalElement<V> {
    fn address_path(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn string_value(&self) -> String {
        self.value.to_string()
    }
}

/// An ordered group of signals written together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalProcessor<V> {
    elements: Vec<SignalElement<V>>,
}

pub type DigitalProcessor = SignalProcessor<bool>;
pub type AnalogProcessor = SignalProcessor<u16>;
pub type SignedAnalogProcessor = SignalProcessor<i16>;
pub type SerialProcessor = SignalProcessor<String>;

impl<V> Default for SignalProcessor<V> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<V> SignalProcessor<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: SignalElement<V>) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[SignalElement<V>] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [SignalElement<V>] {
        &mut self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<V> FromIterator<SignalElement<V>> for SignalProcessor<V> {
    fn from_iter<I: IntoIterator<Item = SignalElement<V>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_values() {
        assert_eq!(DigitalElement::new("A/On", true).string_value(), "true");
        assert_eq!(AnalogElement::new("A/Level", 65535).string_value(), "65535");
        assert_eq!(
            SignedAnalogElement::new("A/Offset", -12).string_value(),
            "-12"
        );
        assert_eq!(
            SerialElement::new("A/Name", "Lobby".to_string()).string_value(),
            "Lobby"
        );
    }

    #[test]
    fn test_unaddressed_element() {
        let mut element = AnalogElement::unaddressed(3);
        assert_eq!(element.address_path(), None);
        element.set_address("Zone/Level");
        assert_eq!(element.address_path(), Some("Zone/Level"));
    }

    #[test]
    fn test_deserialize_serial_element() {
        let element: SerialElement =
            serde_json::from_str(r#"{ "path": "Room/Name", "value": "Lobby" }"#).unwrap();
        assert_eq!(element, SerialElement::new("Room/Name", "Lobby".to_string()));

        let element: SerialElement = serde_json::from_str(r#"{ "value": "x" }"#).unwrap();
        assert_eq!(element.address_path(), None);
    }
}
