//! Element tree for BER-encoded data
//!
//! A decoded buffer is represented as a tree of [`Element`]s. Primitive
//! elements carry their content octets verbatim; constructed elements carry
//! their children in the order they appear on the wire. Nothing beyond the
//! tag and the raw payload is interpreted.

use crate::error::{TreeError, TreeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display names of the four tag classes, indexed by class bits
pub const CLASS_NAMES: [&str; 4] = ["UNIVERSAL", "APPLICATION", "CONTEXT-SPECIFIC", "PRIVATE"];

/// Display names of the two encoding forms, indexed by the form bit
pub const FORM_NAMES: [&str; 2] = ["PRIMITIVE", "CONSTRUCTED"];

/// Tag class (bits 8-7 of the identifier octet)
///
/// - **Universal**: Standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: Application-wide types
/// - **Context-specific**: Meaning depends on the enclosing type
/// - **Private**: Private-use types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl TagClass {
    /// Get tag class from the identifier octet (bits 8-7)
    pub fn from_bits(octet: u8) -> Self {
        match (octet >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }

    /// Convert tag class to its position in the identifier octet
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

impl fmt::Display for TagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CLASS_NAMES[*self as usize])
    }
}

/// Encoding form (bit 6 of the identifier octet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    /// Content octets are the value itself
    Primitive = 0,
    /// Content octets are a series of nested TLVs
    Constructed = 1,
}

impl Form {
    /// Get form from the identifier octet (bit 6)
    pub fn from_bit(octet: u8) -> Self {
        if octet & 0x20 != 0 {
            Form::Constructed
        } else {
            Form::Primitive
        }
    }

    /// Convert form to its position in the identifier octet
    pub fn to_bit(self) -> u8 {
        (self as u8) << 5
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FORM_NAMES[*self as usize])
    }
}

/// A single node of the BER element tree
///
/// Exactly one of `value` and `elements` is populated, selected by `form`:
/// primitive elements own their content octets, constructed elements own
/// their children. The constructors [`Element::primitive`] and
/// [`Element::constructed`] always produce a consistent element;
/// [`Element::from_parts`] and deserialization do not, which is why the
/// encoder calls [`Element::validate`] before writing anything.
///
/// A zero-length primitive (NULL, empty OCTET STRING) holds an empty but
/// present value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    class: TagClass,
    form: Form,
    tag_code: u32,
    #[serde(
        default,
        with = "serde_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elements: Option<Vec<Element>>,
}

impl Element {
    /// Create a primitive element
    ///
    /// # Arguments
    /// * `class` - Tag class
    /// * `tag_code` - Tag number
    /// * `value` - Content octets, stored verbatim
    pub fn primitive(class: TagClass, tag_code: u32, value: Vec<u8>) -> Self {
        Self {
            class,
            form: Form::Primitive,
            tag_code,
            value: Some(value),
            elements: None,
        }
    }

    /// Create a constructed element
    ///
    /// # Arguments
    /// * `class` - Tag class
    /// * `tag_code` - Tag number
    /// * `elements` - Children, in wire order
    pub fn constructed(class: TagClass, tag_code: u32, elements: Vec<Element>) -> Self {
        Self {
            class,
            form: Form::Constructed,
            tag_code,
            value: None,
            elements: Some(elements),
        }
    }

    /// Create an element from raw parts without checking the payload invariant
    pub fn from_parts(
        class: TagClass,
        form: Form,
        tag_code: u32,
        value: Option<Vec<u8>>,
        elements: Option<Vec<Element>>,
    ) -> Self {
        Self {
            class,
            form,
            tag_code,
            value,
            elements,
        }
    }

    /// Get tag class
    pub fn class(&self) -> TagClass {
        self.class
    }

    /// Get encoding form
    pub fn form(&self) -> Form {
        self.form
    }

    /// Check if element is constructed
    pub fn is_constructed(&self) -> bool {
        self.form == Form::Constructed
    }

    /// Get tag number
    pub fn tag_code(&self) -> u32 {
        self.tag_code
    }

    /// Content octets of a primitive element
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Children of a constructed element
    pub fn elements(&self) -> Option<&[Element]> {
        self.elements.as_deref()
    }

    /// Take ownership of the content octets
    pub fn into_value(self) -> Option<Vec<u8>> {
        self.value
    }

    /// Take ownership of the children
    pub fn into_elements(self) -> Option<Vec<Element>> {
        self.elements
    }

    /// Check the payload invariant for this element and all its descendants
    ///
    /// # Error Handling
    /// Returns `InvariantViolation` if a primitive element lacks a value or
    /// carries children, or a constructed element lacks children or carries
    /// a value.
    pub fn validate(&self) -> TreeResult<()> {
        match (self.form, &self.value, &self.elements) {
            (Form::Primitive, Some(_), None) => Ok(()),
            (Form::Constructed, None, Some(children)) => {
                children.iter().try_for_each(Element::validate)
            }
            (form, value, elements) => Err(TreeError::InvariantViolation(format!(
                "{} element [{} {}] has value: {}, elements: {}",
                form,
                self.class,
                self.tag_code,
                value.is_some(),
                elements.is_some()
            ))),
        }
    }
}
