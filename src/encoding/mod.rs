//! # Encoding Module
//!
//! Bidirectional mapping between chord labels and dense class indices for
//! categorical model inputs and outputs.
//!
//! ## Sub-modules
//! - `bands` - Generic table-driven encoder over 12-wide quality bands
//! - `codecs` - The two fixed schemes plus scheme selection
//!
//! ## Class Layout
//! Index 0 is always [`NO_CHORD`]. Every other index falls in a 12-wide band,
//! one band per supported quality, in this fixed order:
//!
//! | Band | MajorMinorCodec | TriadCodec |
//! |------|-----------------|------------|
//! | 1-12 | major | major |
//! | 13-24 | minor (`m`) | minor (`m`) |
//! | 25-36 | - | augmented (`aug`) |
//! | 37-48 | - | diminished (`dim`) |
//!
//! Within a band, position `index - band_start` is the root pitch class.
//! The two schemes are independent: an index from one is meaningless to the other.
//!
//! ## Example
//! ```rust
//! use chordcodec::{ChordSymbolFunctions, MajorMinorCodec, TriadCodec};
//!
//! let major_minor = MajorMinorCodec::new(ChordSymbolFunctions);
//! assert_eq!(major_minor.encode("C#m").unwrap(), 14);
//! assert_eq!(major_minor.decode(14).unwrap(), "C#m");
//!
//! let triad = TriadCodec::new(ChordSymbolFunctions);
//! assert_eq!(triad.encode("Ebdim").unwrap(), 40);
//! assert_eq!(triad.decode(40).unwrap(), "Ebdim");
//! ```

mod bands;
mod codecs;

#[cfg(test)]
mod tests;

pub use bands::{band_classes, Band, ChordBandEncoding, MAJOR_MINOR_BANDS, TRIAD_BANDS};
pub use codecs::{AnyChordCodec, EncodingScheme, MajorMinorCodec, TriadCodec};

use crate::error::Result;

/// Sentinel label for "no harmony at this step"
pub const NO_CHORD: &str = "N.C.";

/// A fixed-size categorical encoding of events
///
/// `encode_events` and `decode_events` stop at the first failing event.
pub trait OneHotEncoding {
    type Event;

    fn num_classes(&self) -> usize;

    /// Neutral event for callers that need a seed
    fn default_event(&self) -> Self::Event;

    fn encode_event(&self, event: &Self::Event) -> Result<usize>;

    fn decode_event(&self, index: usize) -> Result<Self::Event>;

    fn encode_events(&self, events: &[Self::Event]) -> Result<Vec<usize>> {
        events.iter().map(|event| self.encode_event(event)).collect()
    }

    fn decode_events(&self, indices: &[usize]) -> Result<Vec<Self::Event>> {
        indices.iter().map(|&index| self.decode_event(index)).collect()
    }
}
