//! Table-driven chord encoder
//!
//! A scheme is an ordered list of [`Band`]s. Band `b` owns indices
//! `[b * 12 + 1, b * 12 + 12]`; index 0 is reserved for no-chord.

use tracing::{debug, trace};

use super::{OneHotEncoding, NO_CHORD};
use crate::chord_symbols::{ChordSymbolOracle, TriadQuality};
use crate::error::{ChordSymbolError, EncodingError, Result};
use crate::pitch::{NOTES_PER_OCTAVE, PITCH_CLASS_NAMES};

/// One 12-wide run of class indices for a single quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub quality: TriadQuality,
    /// Appended to the root name when decoding
    pub suffix: &'static str,
}

pub const MAJOR_MINOR_BANDS: &[Band] = &[
    Band {
        quality: TriadQuality::Major,
        suffix: "",
    },
    Band {
        quality: TriadQuality::Minor,
        suffix: "m",
    },
];

// Band order is the external contract with trained models. Append only.
pub const TRIAD_BANDS: &[Band] = &[
    Band {
        quality: TriadQuality::Major,
        suffix: "",
    },
    Band {
        quality: TriadQuality::Minor,
        suffix: "m",
    },
    Band {
        quality: TriadQuality::Augmented,
        suffix: "aug",
    },
    Band {
        quality: TriadQuality::Diminished,
        suffix: "dim",
    },
];

/// Class count for a band table: one band per quality plus no-chord
pub const fn band_classes(bands: &[Band]) -> usize {
    bands.len() * NOTES_PER_OCTAVE + 1
}

/// Chord encoder over an arbitrary band table
///
/// # Examples
/// ```
/// use chordcodec::{Band, ChordBandEncoding, ChordSymbolFunctions, TriadQuality};
///
/// const MINOR_ONLY: &[Band] = &[Band { quality: TriadQuality::Minor, suffix: "m" }];
///
/// let codec = ChordBandEncoding::new(ChordSymbolFunctions, "minor-only", MINOR_ONLY).unwrap();
/// assert_eq!(codec.num_classes(), 13);
/// assert_eq!(codec.encode("Am").unwrap(), 10);
/// assert!(codec.encode("A").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChordBandEncoding<O> {
    oracle: O,
    scheme: &'static str,
    bands: &'static [Band],
}

impl<O: ChordSymbolOracle> ChordBandEncoding<O> {
    /// Build an encoder for a custom band table.
    ///
    /// The table must be non-empty, must not contain `TriadQuality::Other`,
    /// and must list each quality at most once.
    pub fn new(oracle: O, scheme: &'static str, bands: &'static [Band]) -> Result<Self> {
        if bands.is_empty() {
            return Err(EncodingError::Config(format!("Encoding '{}' has no bands", scheme)));
        }

        for (i, band) in bands.iter().enumerate() {
            if band.quality == TriadQuality::Other {
                return Err(EncodingError::Config(format!(
                    "Encoding '{}' cannot give a band to other-quality chords",
                    scheme
                )));
            }
            if bands[..i].iter().any(|earlier| earlier.quality == band.quality) {
                return Err(EncodingError::Config(format!(
                    "Encoding '{}' lists the {} band twice",
                    scheme, band.quality
                )));
            }
        }

        Ok(Self::from_table(oracle, scheme, bands))
    }

    /// Build from one of the built-in tables, which are known to be valid
    pub(crate) fn from_table(oracle: O, scheme: &'static str, bands: &'static [Band]) -> Self {
        Self {
            oracle,
            scheme,
            bands,
        }
    }

    pub fn num_classes(&self) -> usize {
        band_classes(self.bands)
    }

    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Encode a chord label into its class index.
    ///
    /// [`NO_CHORD`] maps to 0 without consulting the oracle. Parse failures
    /// from the oracle are passed through unchanged.
    pub fn encode(&self, label: &str) -> Result<usize> {
        if label == NO_CHORD {
            return Ok(0);
        }

        let root = self.oracle.root_of(label)?;
        let quality = self.oracle.quality_of(label)?;

        if root >= NOTES_PER_OCTAVE {
            debug!(label, root, "oracle returned a root outside the octave");
            return Err(ChordSymbolError::InvalidRoot {
                symbol: label.to_string(),
            }
            .into());
        }

        let band = match self.bands.iter().position(|band| band.quality == quality) {
            Some(band) => band,
            None => {
                debug!(
                    label,
                    %quality,
                    scheme = self.scheme,
                    "rejecting unsupported chord quality"
                );
                return Err(EncodingError::UnsupportedQuality {
                    label: label.to_string(),
                    quality,
                    scheme: self.scheme,
                });
            }
        };

        let index = band * NOTES_PER_OCTAVE + root + 1;
        trace!(label, index, "encoded chord");
        Ok(index)
    }

    /// Decode a class index back into its canonical chord label.
    pub fn decode(&self, index: usize) -> Result<String> {
        if index == 0 {
            return Ok(NO_CHORD.to_string());
        }

        // Half-open bands: offset / 12 picks the band, offset % 12 the root
        let offset = index - 1;
        let band = self.bands.get(offset / NOTES_PER_OCTAVE).ok_or_else(|| {
            debug!(index, scheme = self.scheme, "class index out of range");
            EncodingError::IndexOutOfRange {
                index,
                num_classes: self.num_classes(),
            }
        })?;

        let root = PITCH_CLASS_NAMES[offset % NOTES_PER_OCTAVE];
        Ok(format!("{}{}", root, band.suffix))
    }
}

impl<O: ChordSymbolOracle> OneHotEncoding for ChordBandEncoding<O> {
    type Event = String;

    fn num_classes(&self) -> usize {
        band_classes(self.bands)
    }

    fn default_event(&self) -> String {
        NO_CHORD.to_string()
    }

    fn encode_event(&self, event: &String) -> Result<usize> {
        self.encode(event)
    }

    fn decode_event(&self, index: usize) -> Result<String> {
        self.decode(index)
    }
}
