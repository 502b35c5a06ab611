//! BER encoder for element trees
//!
//! This module flattens an [`Element`] tree back into BER bytes. Every
//! element is written with a definite length; constructed content is encoded
//! into a scratch buffer first so its length is known before it is written.
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_tree_ber::ber::BerEncoder;
//! use asn1_tree_core::{Element, TagClass};
//!
//! let element = Element::constructed(
//!     TagClass::Universal,
//!     16,
//!     vec![Element::primitive(TagClass::Universal, 4, vec![0x00, 0x01, 0x02])],
//! );
//! let mut encoder = BerEncoder::new();
//! encoder.encode_element(&element)?;
//! assert_eq!(encoder.into_bytes(), vec![0x30, 0x05, 0x04, 0x03, 0x00, 0x01, 0x02]);
//! # Ok::<(), asn1_tree_core::TreeError>(())
//! ```

use crate::ber::config::{EncoderConfig, LengthForm};
use crate::ber::types::{BerLength, BerTag};
use asn1_tree_core::{Element, Form, TreeError, TreeResult};

/// BER encoder for element trees
///
/// # Memory Management
///
/// The encoder accumulates output in a `Vec<u8>`. Use `with_capacity()` to
/// pre-allocate when the output size is roughly known.
///
/// # Error Handling
///
/// Encoding fails with:
/// - `InvariantViolation` if an element's payload does not match its form
/// - `UnsupportedTag` for tag numbers above 30, or universal primitive tag 0
///   (its identifier octet is the end-of-contents marker)
/// - `UnsupportedOperation` if indefinite length is requested
///
/// On error the buffer keeps whatever was written before the failing element.
pub struct BerEncoder {
    buffer: Vec<u8>,
    config: EncoderConfig,
}

impl BerEncoder {
    /// Create a new BER encoder with default settings
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Create a new BER encoder with explicit settings
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            buffer: Vec::new(),
            config,
        }
    }

    /// Create a new BER encoder with initial capacity
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    ///
    /// # Why Pre-allocate?
    /// Constructed content is copied into the buffer once its length is
    /// known; a buffer sized for the whole tree avoids reallocating during
    /// those copies.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            config: EncoderConfig::default(),
        }
    }

    /// Encode an element and all its descendants, appending to the buffer
    pub fn encode_element(&mut self, element: &Element) -> TreeResult<()> {
        element.validate()?;
        encode_into(element, &self.config, &mut self.buffer)
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the encoder buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for BerEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Append the encoding of an already validated element to `out`
///
/// # Why a Scratch Buffer per Constructed Element?
/// The length octets precede the content, and their count depends on the
/// content size. Children are therefore encoded into an owned `Vec` first,
/// and only the exact-size result is appended to `out`. Nothing is appended
/// for an element whose encoding fails.
fn encode_into(element: &Element, config: &EncoderConfig, out: &mut Vec<u8>) -> TreeResult<()> {
    let tag = BerTag::of(element);
    log::trace!(
        "Encoding {} {} [{}]",
        tag.class(),
        tag.form(),
        tag.number()
    );

    let mut header = Vec::with_capacity(2);
    tag.encode(&mut header)
        .inspect_err(|e| log::debug!("Rejecting element for encoding: {}", e))?;

    match element.form() {
        Form::Primitive => {
            let value = element.value().ok_or_else(|| missing_payload(element))?;
            BerLength::Definite(value.len()).encode(&mut header)?;
            out.extend_from_slice(&header);
            out.extend_from_slice(value);
        }
        Form::Constructed => {
            if config.length_form() == LengthForm::Indefinite {
                log::debug!("Rejecting indefinite-length encoding request");
                BerLength::Indefinite.encode(&mut header)?;
            }

            let children = element.elements().ok_or_else(|| missing_payload(element))?;
            let mut content = Vec::new();
            for child in children {
                encode_into(child, config, &mut content)?;
            }

            BerLength::Definite(content.len()).encode(&mut header)?;
            out.extend_from_slice(&header);
            out.extend_from_slice(&content);
        }
    }

    Ok(())
}

fn missing_payload(element: &Element) -> TreeError {
    TreeError::InvariantViolation(format!(
        "{} element [{} {}] has no payload",
        element.form(),
        element.class(),
        element.tag_code()
    ))
}

/// Encode an element with default settings
pub fn encode(element: &Element) -> TreeResult<Vec<u8>> {
    encode_with(element, &EncoderConfig::default())
}

/// Encode an element with explicit settings
pub fn encode_with(element: &Element, config: &EncoderConfig) -> TreeResult<Vec<u8>> {
    let mut encoder = BerEncoder::with_config(*config);
    encoder.encode_element(element)?;
    Ok(encoder.into_bytes())
}
