//! BER (Basic Encoding Rules) codec for ASN.1 element trees
//!
//! Each ASN.1 value is encoded as a TLV (Tag-Length-Value) triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C F T T T T T
//! ```
//! Where:
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - F = Primitive (0) or Constructed (1)
//! - TTTTT = Tag number (0-30), or 11111 when a base-128 tag number follows
//!
//! ## Length Encoding
//!
//! - **Short form** (1 byte): lengths 0-127
//! - **Long form**: `0x80 | n`, then `n` big-endian length bytes
//! - **Indefinite form**: `0x80`, content ends with the end-of-contents
//!   marker `0x00 0x00`
//!
//! ## Value Encoding
//!
//! Primitive content is kept as raw bytes. Constructed content is a series
//! of nested TLVs and becomes the element's children.
//!
//! # Implementation Notes
//!
//! 1. **Tag Numbers**: High tag numbers are decoded up to `u32::MAX` but
//!    never encoded; encoding a tag number above 30 fails.
//! 2. **Indefinite Length**: Decoded, never encoded.
//! 3. **Nesting**: Decoding recurses once per constructed level, bounded by
//!    [`DecoderConfig::max_depth`].

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod types;

pub use config::{DecoderConfig, EncoderConfig, LengthForm, DEFAULT_MAX_DEPTH};
pub use decoder::{decode, decode_all, decode_prefix, decode_with, BerDecoder};
pub use encoder::{encode, encode_with, BerEncoder};
pub use types::{BerLength, BerTag, MAX_LOW_TAG_NUMBER};
