//! Core types for the asn1-tree BER codec
//!
//! This crate provides the element tree that the codec produces and consumes,
//! together with the error type shared by every codec crate.

pub mod error;
pub mod element;

pub use error::{TreeError, TreeResult};
pub use element::{Element, Form, TagClass};
