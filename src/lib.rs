pub mod chord_symbols;
pub mod config;
pub mod encoding;
pub mod error;
pub mod pitch;

pub use chord_symbols::{ChordSymbolFunctions, ChordSymbolOracle, ParsedChord, TriadQuality};
pub use config::CodecConfig;
pub use encoding::{
    AnyChordCodec, Band, ChordBandEncoding, EncodingScheme, MajorMinorCodec, OneHotEncoding,
    TriadCodec, NO_CHORD,
};
pub use error::*;

/// Encode a chord label with the built-in chord symbol parser.
pub fn encode_chord(scheme: EncodingScheme, label: &str) -> Result<usize> {
    AnyChordCodec::new(scheme, ChordSymbolFunctions).encode(label)
}

/// Decode a class index into its canonical chord label.
pub fn decode_chord(scheme: EncodingScheme, index: usize) -> Result<String> {
    AnyChordCodec::new(scheme, ChordSymbolFunctions).decode(index)
}
