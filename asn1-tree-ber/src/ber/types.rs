//! BER encoding types (Tag, Length, etc.)

use asn1_tree_core::{Element, Form, TagClass, TreeError, TreeResult};

/// Highest tag number that fits in the low five bits of the identifier octet
pub const MAX_LOW_TAG_NUMBER: u32 = 30;

/// Low five bits all set: the tag number follows in base-128 octets
const HIGH_TAG_MARKER: u8 = 0x1F;

/// Length octet announcing indefinite length
const INDEFINITE_LENGTH: u8 = 0x80;

/// Length octet value reserved by X.690 for future extension
const RESERVED_LENGTH: u8 = 0xFF;

/// BER Tag
///
/// A BER tag identifies the type of an ASN.1 value. It consists of:
/// - **Class**: Universal, Application, Context-specific, or Private
/// - **Form**: Primitive or constructed
/// - **Tag Number**: 0-30 in the identifier octet, or high tag number form
///
/// # Encoding Format
///
/// Low tag number (0-30):
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C F T T T T T
/// ```
///
/// High tag number (> 30):
/// ```text
/// First byte:  C C F 1 1 1 1 1  (all tag bits set to 1)
/// Following bytes: 1 T T T T T T T  (continuation bytes, last byte has bit 8 = 0)
/// ```
///
/// Only the low tag number form is emitted; both forms are decoded.
///
/// # Why Decode More Than We Encode?
/// Producers such as certificate issuers and directory servers may use
/// high tag numbers. Reading them keeps such input walkable even though
/// this codec never writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerTag {
    class: TagClass,
    form: Form,
    number: u32,
}

impl BerTag {
    /// Create a new BER tag
    pub fn new(class: TagClass, form: Form, number: u32) -> Self {
        Self { class, form, number }
    }

    /// Tag of an existing element
    pub fn of(element: &Element) -> Self {
        Self::new(element.class(), element.form(), element.tag_code())
    }

    /// Get tag class
    pub fn class(&self) -> TagClass {
        self.class
    }

    /// Get encoding form
    pub fn form(&self) -> Form {
        self.form
    }

    /// Get tag number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Check if this tag would be written as the end-of-contents octet
    pub fn is_end_of_contents(&self) -> bool {
        self.class == TagClass::Universal && self.form == Form::Primitive && self.number == 0
    }

    /// Append the identifier octet to `out`
    ///
    /// # Error Handling
    /// Returns `UnsupportedTag` if:
    /// - The tag number is above 30 (high tag number emission is not implemented)
    /// - The tag is universal, primitive, number 0
    ///
    /// # Why Reject Tag 0?
    /// Universal primitive tag 0 produces the identifier octet `0x00`, which
    /// is the first octet of the end-of-contents marker. The decoder reads it
    /// as a marker, so the element could never be decoded back.
    pub fn encode(&self, out: &mut Vec<u8>) -> TreeResult<()> {
        if self.number > MAX_LOW_TAG_NUMBER || self.is_end_of_contents() {
            return Err(TreeError::UnsupportedTag(self.number));
        }

        out.push(self.class.to_bits() | self.form.to_bit() | self.number as u8);
        Ok(())
    }

    /// Decode tag from bytes
    ///
    /// # Returns
    /// Returns `Ok((BerTag, bytes_consumed))` if successful, `Err` otherwise
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is empty or ends inside a high tag number
    /// - The high tag number does not fit in 32 bits
    pub fn decode(data: &[u8]) -> TreeResult<(Self, usize)> {
        let Some(&first_byte) = data.first() else {
            return Err(TreeError::MalformedInput(
                "Empty buffer for tag decoding".to_string(),
            ));
        };

        let class = TagClass::from_bits(first_byte);
        let form = Form::from_bit(first_byte);
        let tag_bits = first_byte & HIGH_TAG_MARKER;

        if tag_bits != HIGH_TAG_MARKER {
            return Ok((Self::new(class, form, tag_bits as u32), 1));
        }

        let mut number = 0u32;
        for (index, &byte) in data[1..].iter().enumerate() {
            if number > (u32::MAX >> 7) {
                return Err(TreeError::TagOverflow);
            }
            number = (number << 7) | (byte & 0x7F) as u32;

            if byte & 0x80 == 0 {
                return Ok((Self::new(class, form, number), index + 2));
            }
        }

        Err(TreeError::MalformedInput(
            "Buffer exhausted inside high tag number".to_string(),
        ))
    }
}

/// BER Length
///
/// Three length forms are recognised:
/// - **Short form**: one octet, bit 8 clear, lengths 0-127
/// - **Long form**: `0x80 | n` followed by `n` big-endian length octets
/// - **Indefinite form**: the single octet `0x80`; content runs up to an
///   end-of-contents marker
///
/// Only definite lengths can be encoded.
///
/// # Why Two Definite Forms?
/// Short form covers the common small lengths in a single octet, while
/// long form supports lengths up to the width of `usize`. The encoder
/// always picks the shortest form, so its output is also valid DER framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerLength {
    /// Content length is known up front
    Definite(usize),
    /// Content is terminated by an end-of-contents marker
    Indefinite,
}

impl BerLength {
    /// Get the definite length value, if any
    pub fn value(&self) -> Option<usize> {
        match self {
            BerLength::Definite(length) => Some(*length),
            BerLength::Indefinite => None,
        }
    }

    /// Append the length octets to `out`
    ///
    /// Short form is used below 128; otherwise long form with the minimum
    /// number of length octets.
    ///
    /// # Error Handling
    /// Returns `UnsupportedOperation` for indefinite length.
    pub fn encode(&self, out: &mut Vec<u8>) -> TreeResult<()> {
        let length = match self {
            BerLength::Definite(length) => *length,
            BerLength::Indefinite => {
                return Err(TreeError::UnsupportedOperation(
                    "Encoding of indefinite length elements is not supported".to_string(),
                ));
            }
        };

        if length < 128 {
            out.push(length as u8);
            return Ok(());
        }

        let bit_length = usize::BITS - length.leading_zeros();
        let num_bytes = bit_length.div_ceil(8) as usize;
        out.push(0x80 | num_bytes as u8);
        out.extend_from_slice(&length.to_be_bytes()[size_of::<usize>() - num_bytes..]);
        Ok(())
    }

    /// Decode length from bytes
    ///
    /// # Returns
    /// Returns `Ok((BerLength, bytes_consumed))` if successful, `Err` otherwise
    ///
    /// # Error Handling
    /// Returns `MalformedInput` if:
    /// - Buffer is too short
    /// - The reserved octet `0xFF` is used
    /// - The length does not fit in `usize`
    pub fn decode(data: &[u8]) -> TreeResult<(Self, usize)> {
        let Some(&first_byte) = data.first() else {
            return Err(TreeError::MalformedInput(
                "Buffer exhausted before length octet".to_string(),
            ));
        };

        if first_byte & 0x80 == 0 {
            return Ok((BerLength::Definite(first_byte as usize), 1));
        }
        if first_byte == INDEFINITE_LENGTH {
            return Ok((BerLength::Indefinite, 1));
        }
        if first_byte == RESERVED_LENGTH {
            return Err(TreeError::MalformedInput(
                "Reserved length octet 0xFF".to_string(),
            ));
        }

        let num_bytes = (first_byte & 0x7F) as usize;
        let Some(octets) = data.get(1..1 + num_bytes) else {
            return Err(TreeError::MalformedInput(format!(
                "Buffer too short for long form length: need {} bytes, got {}",
                1 + num_bytes,
                data.len()
            )));
        };

        let mut length = 0usize;
        for &octet in octets {
            length = length
                .checked_mul(256)
                .map(|l| l | octet as usize)
                .ok_or_else(|| {
                    TreeError::MalformedInput(format!(
                        "Length encoding too large: {} bytes",
                        num_bytes
                    ))
                })?;
        }

        Ok((BerLength::Definite(length), 1 + num_bytes))
    }
}
