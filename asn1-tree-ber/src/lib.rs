//! Schema-agnostic BER codec for ASN.1 element trees
//!
//! [`decode`] turns a buffer into a tree of [`Element`]s and [`encode`]
//! turns a tree back into bytes. Values are never interpreted: primitive
//! content stays raw and constructed content becomes children, so callers
//! can walk certificates, directory protocol messages and other ASN.1
//! framed data without a schema compiler.
//!
//! ```rust
//! use asn1_tree_ber::{decode, encode};
//!
//! let data = [0x30, 0x80, 0x04, 0x03, 0x00, 0x01, 0x02, 0x00, 0x00];
//! let element = decode(&data)?.expect("not an end-of-contents marker");
//! assert_eq!(element.elements().map(<[_]>::len), Some(1));
//!
//! // Re-encoding always uses definite lengths
//! assert_eq!(encode(&element)?, vec![0x30, 0x05, 0x04, 0x03, 0x00, 0x01, 0x02]);
//! # Ok::<(), asn1_tree_core::TreeError>(())
//! ```

pub mod ber;

pub use asn1_tree_core::{Element, Form, TagClass, TreeError, TreeResult};
pub use ber::{
    decode, decode_all, decode_prefix, decode_with, encode, encode_with, BerDecoder, BerEncoder,
    BerLength, BerTag, DecoderConfig, EncoderConfig, LengthForm,
};
