use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bands::{band_classes, Band, ChordBandEncoding, MAJOR_MINOR_BANDS, TRIAD_BANDS};
use super::OneHotEncoding;
use crate::chord_symbols::{ChordSymbolFunctions, ChordSymbolOracle};
use crate::error::{EncodingError, Result};

/// Which chord class layout to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingScheme {
    /// 25 classes: no-chord, 12 major, 12 minor
    #[default]
    MajorMinor,
    /// 49 classes: no-chord, 12 each of major, minor, augmented, diminished
    Triad,
}

impl EncodingScheme {
    pub fn name(&self) -> &'static str {
        match self {
            EncodingScheme::MajorMinor => "major-minor",
            EncodingScheme::Triad => "triad",
        }
    }

    pub const fn bands(&self) -> &'static [Band] {
        match self {
            EncodingScheme::MajorMinor => MAJOR_MINOR_BANDS,
            EncodingScheme::Triad => TRIAD_BANDS,
        }
    }

    pub const fn num_classes(&self) -> usize {
        band_classes(self.bands())
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingScheme {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "major-minor" => Ok(EncodingScheme::MajorMinor),
            "triad" => Ok(EncodingScheme::Triad),
            other => Err(EncodingError::Config(format!(
                "Unknown encoding scheme '{}' (expected 'major-minor' or 'triad')",
                other
            ))),
        }
    }
}

fn scheme_encoding<O: ChordSymbolOracle>(
    scheme: EncodingScheme,
    oracle: O,
) -> ChordBandEncoding<O> {
    ChordBandEncoding::from_table(oracle, scheme.name(), scheme.bands())
}

/// Encodes chords as root + major/minor, with zero index for no-chord.
///
/// - 0: no-chord
/// - 1-12: major triads, 1 is C, 2 is C#, ...
/// - 13-24: minor triads, 13 is Cm, 14 is C#m, ...
#[derive(Debug, Clone)]
pub struct MajorMinorCodec<O = ChordSymbolFunctions> {
    inner: ChordBandEncoding<O>,
}

impl<O: ChordSymbolOracle> MajorMinorCodec<O> {
    pub const NUM_CLASSES: usize = EncodingScheme::MajorMinor.num_classes();

    pub fn new(oracle: O) -> Self {
        Self {
            inner: scheme_encoding(EncodingScheme::MajorMinor, oracle),
        }
    }

    pub fn num_classes(&self) -> usize {
        self.inner.num_classes()
    }

    pub fn encode(&self, label: &str) -> Result<usize> {
        self.inner.encode(label)
    }

    pub fn decode(&self, index: usize) -> Result<String> {
        self.inner.decode(index)
    }

    pub fn oracle(&self) -> &O {
        self.inner.oracle()
    }

    pub fn band_encoding(&self) -> &ChordBandEncoding<O> {
        &self.inner
    }
}

impl Default for MajorMinorCodec {
    fn default() -> Self {
        Self::new(ChordSymbolFunctions)
    }
}

/// Encodes chords as root + triad type, with zero index for no-chord.
///
/// - 0: no-chord
/// - 1-12: major triads
/// - 13-24: minor triads (`m`)
/// - 25-36: augmented triads (`aug`)
/// - 37-48: diminished triads (`dim`)
#[derive(Debug, Clone)]
pub struct TriadCodec<O = ChordSymbolFunctions> {
    inner: ChordBandEncoding<O>,
}

impl<O: ChordSymbolOracle> TriadCodec<O> {
    pub const NUM_CLASSES: usize = EncodingScheme::Triad.num_classes();

    pub fn new(oracle: O) -> Self {
        Self {
            inner: scheme_encoding(EncodingScheme::Triad, oracle),
        }
    }

    pub fn num_classes(&self) -> usize {
        self.inner.num_classes()
    }

    pub fn encode(&self, label: &str) -> Result<usize> {
        self.inner.encode(label)
    }

    pub fn decode(&self, index: usize) -> Result<String> {
        self.inner.decode(index)
    }

    pub fn oracle(&self) -> &O {
        self.inner.oracle()
    }

    pub fn band_encoding(&self) -> &ChordBandEncoding<O> {
        &self.inner
    }
}

impl Default for TriadCodec {
    fn default() -> Self {
        Self::new(ChordSymbolFunctions)
    }
}

/// Either codec, selected at runtime from an [`EncodingScheme`]
#[derive(Debug, Clone)]
pub enum AnyChordCodec<O = ChordSymbolFunctions> {
    MajorMinor(MajorMinorCodec<O>),
    Triad(TriadCodec<O>),
}

impl<O: ChordSymbolOracle> AnyChordCodec<O> {
    pub fn new(scheme: EncodingScheme, oracle: O) -> Self {
        match scheme {
            EncodingScheme::MajorMinor => AnyChordCodec::MajorMinor(MajorMinorCodec::new(oracle)),
            EncodingScheme::Triad => AnyChordCodec::Triad(TriadCodec::new(oracle)),
        }
    }

    pub fn scheme(&self) -> EncodingScheme {
        match self {
            AnyChordCodec::MajorMinor(_) => EncodingScheme::MajorMinor,
            AnyChordCodec::Triad(_) => EncodingScheme::Triad,
        }
    }

    pub fn band_encoding(&self) -> &ChordBandEncoding<O> {
        match self {
            AnyChordCodec::MajorMinor(codec) => codec.band_encoding(),
            AnyChordCodec::Triad(codec) => codec.band_encoding(),
        }
    }

    pub fn num_classes(&self) -> usize {
        self.band_encoding().num_classes()
    }

    pub fn encode(&self, label: &str) -> Result<usize> {
        self.band_encoding().encode(label)
    }

    pub fn decode(&self, index: usize) -> Result<String> {
        self.band_encoding().decode(index)
    }
}

/// Forward `OneHotEncoding` to the wrapped [`ChordBandEncoding`]
macro_rules! delegate_one_hot {
    ($($codec:ident),+) => {
        $(
            impl<O: ChordSymbolOracle> OneHotEncoding for $codec<O> {
                type Event = String;

                fn num_classes(&self) -> usize {
                    OneHotEncoding::num_classes(self.band_encoding())
                }

                fn default_event(&self) -> String {
                    self.band_encoding().default_event()
                }

                fn encode_event(&self, event: &String) -> Result<usize> {
                    self.band_encoding().encode_event(event)
                }

                fn decode_event(&self, index: usize) -> Result<String> {
                    self.band_encoding().decode_event(index)
                }
            }
        )+
    };
}

delegate_one_hot!(MajorMinorCodec, TriadCodec, AnyChordCodec);
