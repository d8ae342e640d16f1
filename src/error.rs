//! # Error Types
//!
//! This module defines all error types for the chord codecs.
//!
//! ## Error Types
//! - `UnsupportedQuality` - Encode-time: the chord's quality has no band in the scheme
//! - `IndexOutOfRange` - Decode-time: the class index is outside `[0, num_classes)`
//! - `ChordSymbol` - The chord symbol parser rejected the label
//! - `Config` - Invalid YAML codec configuration
//!
//! None of these are recoverable inside the codec. They always reach the caller.
//!
//! ## Usage
//! ```rust
//! use chordcodec::{encode_chord, EncodingError, EncodingScheme};
//!
//! match encode_chord(EncodingScheme::MajorMinor, "Bdim") {
//!     Ok(index) => println!("class {}", index),
//!     Err(EncodingError::UnsupportedQuality { label, quality, .. }) => {
//!         eprintln!("{} is a {} chord", label, quality);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::chord_symbols::TriadQuality;

/// Failures reported by a [`ChordSymbolOracle`](crate::ChordSymbolOracle).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordSymbolError {
    #[error("Empty chord symbol")]
    Empty,

    #[error("Invalid chord root in '{symbol}'")]
    InvalidRoot { symbol: String },

    #[error("Unrecognized chord kind '{kind}' in '{symbol}'")]
    InvalidKind { symbol: String, kind: String },

    #[error("Invalid bass note '{bass}' in '{symbol}'")]
    InvalidBass { symbol: String, bass: String },
}

#[derive(Error, Debug)]
pub enum EncodingError {
    /// The oracle classified the chord with a quality the scheme has no band for.
    ///
    /// # Example
    /// ```
    /// # use chordcodec::{EncodingError, TriadQuality};
    /// let err = EncodingError::UnsupportedQuality {
    ///     label: "G7".to_string(),
    ///     quality: TriadQuality::Other,
    ///     scheme: "major-minor",
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Chord 'G7' has other quality, not representable in the major-minor encoding"
    /// );
    /// ```
    #[error("Chord '{label}' has {quality} quality, not representable in the {scheme} encoding")]
    UnsupportedQuality {
        label: String,
        quality: TriadQuality,
        scheme: &'static str,
    },

    /// A class index outside `[0, num_classes)` was passed to decode.
    ///
    /// # Example
    /// ```
    /// # use chordcodec::EncodingError;
    /// let err = EncodingError::IndexOutOfRange { index: 25, num_classes: 25 };
    /// assert_eq!(err.to_string(), "Class index 25 is out of range for 25 classes");
    /// ```
    #[error("Class index {index} is out of range for {num_classes} classes")]
    IndexOutOfRange { index: usize, num_classes: usize },

    #[error("Invalid chord symbol: {0}")]
    ChordSymbol(#[from] ChordSymbolError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EncodingError>;

impl EncodingError {
    /// Returns true if this error was raised while turning a label into an index
    pub fn is_encode_error(&self) -> bool {
        matches!(
            self,
            EncodingError::UnsupportedQuality { .. } | EncodingError::ChordSymbol(_)
        )
    }

    /// Returns true if this error was raised while turning an index into a label
    pub fn is_decode_error(&self) -> bool {
        matches!(self, EncodingError::IndexOutOfRange { .. })
    }
}
