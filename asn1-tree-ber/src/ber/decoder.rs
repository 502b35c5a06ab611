//! BER decoder for element trees
//!
//! This module turns BER-encoded bytes into an [`Element`] tree by recursive
//! descent. Constructed elements with definite length are decoded from
//! exactly their declared content range; indefinite-length elements are
//! decoded up to their end-of-contents marker.
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_tree_ber::ber::BerDecoder;
//!
//! let data = [0x04, 0x03, 0x00, 0x01, 0x02];
//! let mut decoder = BerDecoder::new(&data);
//! let element = decoder.decode_element()?.expect("not an end-of-contents marker");
//! assert_eq!(element.value(), Some(&[0x00, 0x01, 0x02][..]));
//! # Ok::<(), asn1_tree_core::TreeError>(())
//! ```

use crate::ber::config::DecoderConfig;
use crate::ber::types::{BerLength, BerTag};
use asn1_tree_core::{Element, Form, TreeError, TreeResult};

/// Identifier octet of the end-of-contents marker
const END_OF_CONTENTS: u8 = 0x00;

/// BER decoder for element trees
///
/// # Position Tracking
///
/// The decoder maintains a position pointer that advances as elements are
/// decoded, so several top-level elements can be read back to back from the
/// same buffer.
///
/// # Error Handling
///
/// All decoding operations return `Result` types. Errors can occur due to:
/// - Buffer underflow (truncated tag, length or content)
/// - Indefinite-length content without its end-of-contents marker
/// - Nesting beyond the configured depth
///
/// A failed decode never yields a partial tree.
pub struct BerDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
    /// Offset of `buffer` within the outermost input, for diagnostics
    base: usize,
    config: DecoderConfig,
}

impl<'a> BerDecoder<'a> {
    /// Create a new BER decoder with default settings
    ///
    /// # Arguments
    /// * `buffer` - Buffer containing BER-encoded data
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_config(buffer, DecoderConfig::default())
    }

    /// Create a new BER decoder with explicit settings
    pub fn with_config(buffer: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            buffer,
            position: 0,
            base: 0,
            config,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    fn offset(&self) -> usize {
        self.base + self.position
    }

    fn malformed(&self, message: String) -> TreeError {
        log::debug!("Rejecting BER input at offset {}: {}", self.offset(), message);
        TreeError::MalformedInput(message)
    }

    /// Read multiple bytes from the buffer
    ///
    /// # Error Handling
    /// Returns error if buffer doesn't have enough bytes.
    fn read_bytes(&mut self, count: usize) -> TreeResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(self.malformed(format!(
                "Buffer exhausted: need {} bytes, have {}",
                count,
                self.remaining()
            )));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..start + count])
    }

    /// Decode one element at the current position
    ///
    /// # Returns
    /// Returns `Ok(Some(element))` for a complete element, or `Ok(None)` if
    /// the current position holds an end-of-contents marker (which is
    /// consumed).
    pub fn decode_element(&mut self) -> TreeResult<Option<Element>> {
        self.decode_at_depth(0)
    }

    /// Consume an end-of-contents marker if one starts here
    ///
    /// A zero identifier octet is the marker wherever it appears. The
    /// following length octet is consumed with it only when that octet is
    /// zero too, so a lone `0x00` ends the enclosing indefinite content and
    /// the next octet starts a new element.
    fn take_end_of_contents(&mut self) -> bool {
        if self.buffer.get(self.position) != Some(&END_OF_CONTENTS) {
            return false;
        }
        self.position += 1;
        if self.buffer.get(self.position) == Some(&0x00) {
            self.position += 1;
        }
        true
    }

    fn decode_at_depth(&mut self, depth: usize) -> TreeResult<Option<Element>> {
        let start = self.offset();

        if self.take_end_of_contents() {
            log::trace!("End-of-contents marker at offset {}", start);
            return Ok(None);
        }

        let (tag, tag_bytes) = BerTag::decode(&self.buffer[self.position..])
            .inspect_err(|e| log::debug!("Rejecting BER tag at offset {}: {}", start, e))?;
        self.position += tag_bytes;

        let (length, length_bytes) = BerLength::decode(&self.buffer[self.position..])
            .inspect_err(|e| log::debug!("Rejecting BER length at offset {}: {}", start, e))?;
        self.position += length_bytes;

        log::trace!(
            "Decoding {} {} [{}] with {:?} at offset {}",
            tag.class(),
            tag.form(),
            tag.number(),
            length,
            start
        );

        let element = match tag.form() {
            Form::Primitive => {
                let Some(length) = length.value() else {
                    return Err(self.malformed(format!(
                        "Primitive element [{} {}] with indefinite length",
                        tag.class(),
                        tag.number()
                    )));
                };
                let value = self.read_bytes(length)?;
                Element::primitive(tag.class(), tag.number(), value.to_vec())
            }
            Form::Constructed => {
                if depth >= self.config.max_depth() {
                    log::debug!(
                        "Rejecting BER input at offset {}: nesting deeper than {}",
                        start,
                        self.config.max_depth()
                    );
                    return Err(TreeError::NestingTooDeep(self.config.max_depth()));
                }
                let children = match length {
                    BerLength::Definite(length) => self.decode_definite_children(length, depth)?,
                    BerLength::Indefinite => self.decode_indefinite_children(depth)?,
                };
                Element::constructed(tag.class(), tag.number(), children)
            }
        };

        Ok(Some(element))
    }

    /// Decode children from exactly `length` content bytes
    fn decode_definite_children(&mut self, length: usize, depth: usize) -> TreeResult<Vec<Element>> {
        let content_offset = self.offset();
        let content = self.read_bytes(length)?;
        let mut content_decoder = BerDecoder {
            buffer: content,
            position: 0,
            base: content_offset,
            config: self.config,
        };

        let mut children = Vec::new();
        while content_decoder.has_remaining() {
            match content_decoder.decode_at_depth(depth + 1)? {
                Some(child) => children.push(child),
                None => {
                    return Err(content_decoder.malformed(
                        "End-of-contents marker inside definite-length content".to_string(),
                    ));
                }
            }
        }
        Ok(children)
    }

    /// Decode children up to and including the end-of-contents marker
    fn decode_indefinite_children(&mut self, depth: usize) -> TreeResult<Vec<Element>> {
        let mut children = Vec::new();
        loop {
            if !self.has_remaining() {
                return Err(self.malformed(
                    "Indefinite-length content without end-of-contents marker".to_string(),
                ));
            }
            match self.decode_at_depth(depth + 1)? {
                Some(child) => children.push(child),
                None => return Ok(children),
            }
        }
    }
}

/// Decode the first element of `bytes` with default settings
///
/// Returns `Ok(None)` if the buffer starts with an end-of-contents marker.
/// Bytes after the first complete element are ignored.
pub fn decode(bytes: &[u8]) -> TreeResult<Option<Element>> {
    decode_with(bytes, &DecoderConfig::default())
}

/// Decode the first element of `bytes` with explicit settings
pub fn decode_with(bytes: &[u8], config: &DecoderConfig) -> TreeResult<Option<Element>> {
    decode_prefix(bytes, config).map(|(element, _)| element)
}

/// Decode the first element of `bytes` and report how many bytes it used
pub fn decode_prefix(bytes: &[u8], config: &DecoderConfig) -> TreeResult<(Option<Element>, usize)> {
    let mut decoder = BerDecoder::with_config(bytes, *config);
    let element = decoder.decode_element()?;
    Ok((element, decoder.position()))
}

/// Decode every element in `bytes`, back to back
///
/// End-of-contents markers between elements are skipped.
pub fn decode_all(bytes: &[u8], config: &DecoderConfig) -> TreeResult<Vec<Element>> {
    let mut decoder = BerDecoder::with_config(bytes, *config);
    let mut elements = Vec::new();
    while decoder.has_remaining() {
        if let Some(element) = decoder.decode_element()? {
            elements.push(element);
        }
    }
    Ok(elements)
}
