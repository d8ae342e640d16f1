//! Chord symbol parsing for class encoding
//!
//! The codecs only need two answers about a chord symbol: its root pitch class
//! and its triad quality. [`ChordSymbolOracle`] is that seam, and
//! [`ChordSymbolFunctions`] is the built-in lead-sheet parser behind it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChordSymbolError;
use crate::pitch;

/// Triad quality of a chord symbol
///
/// `Other` covers every chord that is not a plain triad (sevenths, suspended,
/// sixths, extended chords, power chords).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriadQuality {
    Major,
    Minor,
    Augmented,
    Diminished,
    Other,
}

impl TriadQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriadQuality::Major => "major",
            TriadQuality::Minor => "minor",
            TriadQuality::Augmented => "augmented",
            TriadQuality::Diminished => "diminished",
            TriadQuality::Other => "other",
        }
    }
}

impl fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root and quality extraction for chord symbols
///
/// Implementations must be safe for concurrent read-only queries.
pub trait ChordSymbolOracle: Send + Sync {
    /// Root pitch class in `[0, 12)`
    fn root_of(&self, symbol: &str) -> Result<usize, ChordSymbolError>;

    fn quality_of(&self, symbol: &str) -> Result<TriadQuality, ChordSymbolError>;
}

impl<T: ChordSymbolOracle + ?Sized> ChordSymbolOracle for &T {
    fn root_of(&self, symbol: &str) -> Result<usize, ChordSymbolError> {
        (**self).root_of(symbol)
    }

    fn quality_of(&self, symbol: &str) -> Result<TriadQuality, ChordSymbolError> {
        (**self).quality_of(symbol)
    }
}

/// A chord symbol split into the parts the codecs care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedChord {
    pub root: usize,
    pub quality: TriadQuality,
}

/// Built-in chord symbol parser
///
/// # Supported Symbols
/// - **Root**: `A`-`G` followed by any number of `#` or `b`
/// - **Major**: `C`, `Cmaj`, `CM`
/// - **Minor**: `Cm`, `Cmin`, `C-`
/// - **Augmented**: `Caug`, `C+`
/// - **Diminished**: `Cdim`, `C°`, `Co`
/// - **Other**: `7`, `maj7`, `M7`, `m7`, `min7`, `-7`, `dim7`, `m7b5`, `ø`,
///   `sus2`, `sus4`, `6`, `m6`, `9`, `maj9`, `m9`, `5`
/// - **Slash bass**: `C/E`, `Am/G` (validated, does not change root or quality)
///
/// # Examples
/// ```
/// use chordcodec::{ChordSymbolFunctions, ChordSymbolOracle, TriadQuality};
///
/// let oracle = ChordSymbolFunctions;
/// assert_eq!(oracle.root_of("F#m").unwrap(), 6);
/// assert_eq!(oracle.quality_of("F#m").unwrap(), TriadQuality::Minor);
/// assert_eq!(oracle.quality_of("G7").unwrap(), TriadQuality::Other);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordSymbolFunctions;

impl ChordSymbolFunctions {
    pub fn parse(&self, symbol: &str) -> Result<ParsedChord, ChordSymbolError> {
        if symbol.is_empty() {
            return Err(ChordSymbolError::Empty);
        }

        let (root, rest) = parse_pitch(symbol).ok_or_else(|| ChordSymbolError::InvalidRoot {
            symbol: symbol.to_string(),
        })?;

        let (kind, bass) = match rest.split_once('/') {
            Some((kind, bass)) => (kind, Some(bass)),
            None => (rest, None),
        };

        if let Some(bass) = bass {
            // The bass must be a bare pitch
            if !matches!(parse_pitch(bass), Some((_, ""))) {
                return Err(ChordSymbolError::InvalidBass {
                    symbol: symbol.to_string(),
                    bass: bass.to_string(),
                });
            }
        }

        let quality = kind_quality(kind).ok_or_else(|| ChordSymbolError::InvalidKind {
            symbol: symbol.to_string(),
            kind: kind.to_string(),
        })?;

        Ok(ParsedChord { root, quality })
    }
}

impl ChordSymbolOracle for ChordSymbolFunctions {
    fn root_of(&self, symbol: &str) -> Result<usize, ChordSymbolError> {
        self.parse(symbol).map(|chord| chord.root)
    }

    fn quality_of(&self, symbol: &str) -> Result<TriadQuality, ChordSymbolError> {
        self.parse(symbol).map(|chord| chord.quality)
    }
}

/// Parse a leading pitch (letter plus accidentals), returning the pitch class
/// and the unparsed remainder
fn parse_pitch(text: &str) -> Option<(usize, &str)> {
    let letter = text.chars().next()?;
    let base = pitch::letter_semitone(letter)?;

    let mut rest = &text[letter.len_utf8()..];
    let mut accidentals = 0;
    loop {
        if let Some(r) = rest.strip_prefix('#') {
            accidentals += 1;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('b') {
            accidentals -= 1;
            rest = r;
        } else {
            break;
        }
    }

    Some((pitch::pitch_class(base, accidentals), rest))
}

fn kind_quality(kind: &str) -> Option<TriadQuality> {
    let quality = match kind {
        "" | "maj" | "M" => TriadQuality::Major,
        "m" | "min" | "-" => TriadQuality::Minor,
        "aug" | "+" => TriadQuality::Augmented,
        "dim" | "°" | "o" => TriadQuality::Diminished,

        // Sevenths
        "7" | "maj7" | "M7" | "m7" | "min7" | "-7" | "dim7" | "°7" | "o7" | "m7b5" | "ø" => {
            TriadQuality::Other
        }
        // Suspended, sixths, extended, power
        "sus2" | "sus4" | "6" | "m6" | "9" | "maj9" | "M9" | "m9" | "min9" | "5" => {
            TriadQuality::Other
        }

        _ => return None,
    };
    Some(quality)
}
