//! asn1-tree - ASN.1 BER element trees without a schema
//!
//! This library decodes BER/DER-encoded bytes into a tree of tagged
//! elements and encodes such trees back into bytes. It is meant as a
//! building block for protocols that carry ASN.1-framed data: callers walk
//! the tree and interpret primitive payloads themselves.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `asn1-tree-core`: Element tree and error handling
//! - `asn1-tree-ber`: BER tag/length parsing, recursive decoder and encoder
//!
//! # Usage
//!
//! ```rust
//! use asn1_tree::{decode, encode, Element, TagClass};
//!
//! let element = decode(&[0x04, 0x03, 0x00, 0x01, 0x02])?.expect("element");
//! assert_eq!(element.class(), TagClass::Universal);
//! assert_eq!(element.tag_code(), 4);
//!
//! let null = Element::primitive(TagClass::Universal, 5, Vec::new());
//! assert_eq!(encode(&null)?, vec![0x05, 0x00]);
//! # Ok::<(), asn1_tree::TreeError>(())
//! ```

// Re-export core types
pub use asn1_tree_core::{Element, Form, TagClass, TreeError, TreeResult};

// Re-export codec API
pub use asn1_tree_ber::{
    decode, decode_all, decode_prefix, decode_with, encode, encode_with, DecoderConfig,
    EncoderConfig, LengthForm,
};

/// Low-level BER building blocks
pub mod ber {
    pub use asn1_tree_ber::ber::*;
}
