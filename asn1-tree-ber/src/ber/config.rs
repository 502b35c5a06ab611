//! Codec configuration
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_tree_ber::ber::{DecoderConfig, EncoderConfig, LengthForm};
//!
//! let decoder_config = DecoderConfig::new().with_max_depth(16);
//! let encoder_config = EncoderConfig::new().with_length_form(LengthForm::Definite);
//! assert_eq!(decoder_config.max_depth(), 16);
//! assert_eq!(encoder_config.length_form(), LengthForm::Definite);
//! ```

use serde::{Deserialize, Serialize};

/// Default nesting limit for decoding
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Decoder settings
///
/// # Default Settings
/// - Max depth: 64 nested constructed elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum number of constructed elements nested inside one another
    max_depth: usize,
}

impl DecoderConfig {
    /// Create a decoder configuration with default settings
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth
    ///
    /// Recursion depth equals nesting depth, so this bounds stack usage on
    /// hostile input.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Get the maximum nesting depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Length form requested for constructed elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthForm {
    /// Content length written up front
    #[default]
    Definite,
    /// Content terminated by an end-of-contents marker (not supported)
    Indefinite,
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    length_form: LengthForm,
}

impl EncoderConfig {
    /// Create an encoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length form used for constructed elements
    pub fn with_length_form(mut self, length_form: LengthForm) -> Self {
        self.length_form = length_form;
        self
    }

    /// Get the length form used for constructed elements
    pub fn length_form(&self) -> LengthForm {
        self.length_form
    }
}
