use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::chord_symbols::{ChordSymbolFunctions, ChordSymbolOracle, TriadQuality};
use crate::error::{ChordSymbolError, EncodingError};
use crate::pitch::PITCH_CLASS_NAMES;

/// Oracle that answers with fixed values and counts how often it is asked
struct FixedOracle {
    root: usize,
    quality: TriadQuality,
    calls: AtomicUsize,
}

impl FixedOracle {
    fn new(root: usize, quality: TriadQuality) -> Self {
        Self {
            root,
            quality,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ChordSymbolOracle for FixedOracle {
    fn root_of(&self, _symbol: &str) -> std::result::Result<usize, ChordSymbolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.root)
    }

    fn quality_of(&self, _symbol: &str) -> std::result::Result<TriadQuality, ChordSymbolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quality)
    }
}

#[test]
fn test_num_classes() {
    assert_eq!(MajorMinorCodec::default().num_classes(), 25);
    assert_eq!(TriadCodec::default().num_classes(), 49);
    assert_eq!(MajorMinorCodec::<ChordSymbolFunctions>::NUM_CLASSES, 25);
    assert_eq!(TriadCodec::<ChordSymbolFunctions>::NUM_CLASSES, 49);
    assert_eq!(EncodingScheme::MajorMinor.num_classes(), 25);
    assert_eq!(EncodingScheme::Triad.num_classes(), 49);
}

#[test]
fn test_default_event() {
    assert_eq!(MajorMinorCodec::default().default_event(), NO_CHORD);
    assert_eq!(TriadCodec::default().default_event(), NO_CHORD);
}

#[test]
fn test_no_chord_skips_oracle() {
    let oracle = FixedOracle::new(0, TriadQuality::Other);
    let codec = MajorMinorCodec::new(&oracle);
    assert_eq!(codec.encode(NO_CHORD).unwrap(), 0);
    assert_eq!(codec.decode(0).unwrap(), NO_CHORD);
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);

    let codec = TriadCodec::new(&oracle);
    assert_eq!(codec.encode(NO_CHORD).unwrap(), 0);
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_major_minor_concrete_cases() {
    let codec = MajorMinorCodec::default();
    assert_eq!(codec.encode("C").unwrap(), 1);
    assert_eq!(codec.decode(1).unwrap(), "C");
    assert_eq!(codec.encode("C#m").unwrap(), 14);
    assert_eq!(codec.decode(14).unwrap(), "C#m");
    assert_eq!(codec.encode("B").unwrap(), 12);
    assert_eq!(codec.encode("Cm").unwrap(), 13);
    assert_eq!(codec.encode("Bm").unwrap(), 24);
}

#[test]
fn test_triad_concrete_cases() {
    let codec = TriadCodec::default();
    assert_eq!(codec.encode("Baug").unwrap(), 36);
    assert_eq!(codec.decode(36).unwrap(), "Baug");
    assert_eq!(codec.encode("Ebdim").unwrap(), 40);
    assert_eq!(codec.decode(40).unwrap(), "Ebdim");
    assert_eq!(codec.encode("Caug").unwrap(), 25);
    assert_eq!(codec.encode("Cdim").unwrap(), 37);
    assert_eq!(codec.encode("Bdim").unwrap(), 48);
}

#[test]
fn test_major_minor_round_trip_all_roots() {
    let codec = MajorMinorCodec::default();
    for (pc, name) in PITCH_CLASS_NAMES.iter().enumerate() {
        let major = name.to_string();
        let minor = format!("{}m", name);
        assert_eq!(codec.encode(&major).unwrap(), pc + 1);
        assert_eq!(codec.encode(&minor).unwrap(), pc + 13);
        assert_eq!(codec.decode(codec.encode(&major).unwrap()).unwrap(), major);
        assert_eq!(codec.decode(codec.encode(&minor).unwrap()).unwrap(), minor);
    }
}

#[test]
fn test_triad_round_trip_all_roots() {
    let codec = TriadCodec::default();
    for name in PITCH_CLASS_NAMES {
        for suffix in ["", "m", "aug", "dim"] {
            let label = format!("{}{}", name, suffix);
            let index = codec.encode(&label).unwrap();
            assert_eq!(codec.decode(index).unwrap(), label);
        }
    }
}

#[test]
fn test_every_index_decodes_and_re_encodes() {
    let codec = TriadCodec::default();
    for index in 0..codec.num_classes() {
        let label = codec.decode(index).unwrap();
        assert_eq!(codec.encode(&label).unwrap(), index, "{}", label);
    }
}

#[test]
fn test_band_boundaries() {
    let codec = TriadCodec::default();
    assert_eq!(codec.decode(12).unwrap(), "B");
    assert_eq!(codec.decode(13).unwrap(), "Cm");
    assert_eq!(codec.decode(24).unwrap(), "Bm");
    assert_eq!(codec.decode(25).unwrap(), "Caug");
    assert_eq!(codec.decode(37).unwrap(), "Cdim");
    assert_eq!(codec.decode(48).unwrap(), "Bdim");
}

#[test]
fn test_enharmonic_input_decodes_to_canonical_spelling() {
    let codec = MajorMinorCodec::default();
    assert_eq!(codec.decode(codec.encode("Db").unwrap()).unwrap(), "C#");
    assert_eq!(codec.decode(codec.encode("D#m").unwrap()).unwrap(), "Ebm");
    assert_eq!(codec.decode(codec.encode("A#").unwrap()).unwrap(), "Bb");
}

#[test]
fn test_unsupported_quality_major_minor() {
    let codec = MajorMinorCodec::default();
    for label in ["G7", "Caug", "Bdim", "Dsus4"] {
        match codec.encode(label) {
            Err(EncodingError::UnsupportedQuality { label: l, scheme, .. }) => {
                assert_eq!(l, label);
                assert_eq!(scheme, "major-minor");
            }
            other => panic!("expected UnsupportedQuality for {}, got {:?}", label, other),
        }
    }
}

#[test]
fn test_unsupported_quality_triad() {
    let codec = TriadCodec::default();
    for label in ["G7", "Cmaj7", "Bm7b5", "Esus2"] {
        let err = codec.encode(label).unwrap_err();
        assert!(
            matches!(err, EncodingError::UnsupportedQuality { quality: TriadQuality::Other, .. }),
            "{}: {:?}",
            label,
            err
        );
        assert!(err.is_encode_error());
    }
}

#[test]
fn test_other_quality_from_injected_oracle() {
    let oracle = FixedOracle::new(4, TriadQuality::Other);
    let err = TriadCodec::new(&oracle).encode("anything").unwrap_err();
    assert!(matches!(err, EncodingError::UnsupportedQuality { .. }));
}

#[test]
fn test_injected_oracle_drives_encoding() {
    let codec = TriadCodec::new(FixedOracle::new(7, TriadQuality::Augmented));
    assert_eq!(codec.encode("whatever the oracle says").unwrap(), 32);
    assert_eq!(codec.oracle().calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_oracle_root_outside_octave_is_rejected() {
    let codec = MajorMinorCodec::new(FixedOracle::new(12, TriadQuality::Major));
    assert!(matches!(
        codec.encode("X"),
        Err(EncodingError::ChordSymbol(ChordSymbolError::InvalidRoot { .. }))
    ));
}

#[test]
fn test_parse_errors_pass_through() {
    let codec = MajorMinorCodec::default();
    assert!(matches!(
        codec.encode(""),
        Err(EncodingError::ChordSymbol(ChordSymbolError::Empty))
    ));
    assert!(matches!(
        codec.encode("Hm"),
        Err(EncodingError::ChordSymbol(ChordSymbolError::InvalidRoot { .. }))
    ));
    assert!(matches!(
        codec.encode("Cxyz"),
        Err(EncodingError::ChordSymbol(ChordSymbolError::InvalidKind { .. }))
    ));
}

#[test]
fn test_index_out_of_range() {
    let err = MajorMinorCodec::default().decode(25).unwrap_err();
    assert!(matches!(err, EncodingError::IndexOutOfRange { index: 25, num_classes: 25 }));
    assert!(err.is_decode_error());

    let err = TriadCodec::default().decode(49).unwrap_err();
    assert!(matches!(err, EncodingError::IndexOutOfRange { index: 49, num_classes: 49 }));

    assert!(TriadCodec::default().decode(usize::MAX).is_err());
}

#[test]
fn test_codecs_are_independent() {
    // Index 25 is C augmented for triads but out of range for major/minor
    assert_eq!(TriadCodec::default().decode(25).unwrap(), "Caug");
    assert!(MajorMinorCodec::default().decode(25).is_err());
}

#[test]
fn test_encode_events_progression() {
    let codec = MajorMinorCodec::default();
    let progression: Vec<String> = ["C", "Am", "F", "G", NO_CHORD]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let indices = codec.encode_events(&progression).unwrap();
    assert_eq!(indices, vec![1, 22, 6, 8, 0]);
    assert_eq!(codec.decode_events(&indices).unwrap(), progression);
}

#[test]
fn test_encode_events_stops_at_first_error() {
    let codec = MajorMinorCodec::default();
    let progression = vec!["C".to_string(), "G7".to_string(), "H".to_string()];
    assert!(matches!(
        codec.encode_events(&progression),
        Err(EncodingError::UnsupportedQuality { .. })
    ));
    assert!(codec.decode_events(&[1, 30, 2]).is_err());
}

#[test]
fn test_any_codec_dispatch() {
    let codec = AnyChordCodec::new(EncodingScheme::Triad, ChordSymbolFunctions);
    assert_eq!(codec.scheme(), EncodingScheme::Triad);
    assert_eq!(codec.num_classes(), 49);
    assert_eq!(codec.encode("Baug").unwrap(), 36);
    assert_eq!(codec.default_event(), NO_CHORD);

    let codec = AnyChordCodec::new(EncodingScheme::MajorMinor, ChordSymbolFunctions);
    assert!(codec.encode("Baug").is_err());
    assert_eq!(codec.decode(24).unwrap(), "Bm");
}

#[test]
fn test_scheme_from_str() {
    assert_eq!("triad".parse::<EncodingScheme>().unwrap(), EncodingScheme::Triad);
    assert_eq!("major-minor".parse::<EncodingScheme>().unwrap(), EncodingScheme::MajorMinor);
    assert!(matches!("seventh".parse::<EncodingScheme>(), Err(EncodingError::Config(_))));
    assert_eq!(EncodingScheme::Triad.to_string(), "triad");
}

#[test]
fn test_codec_shared_across_threads() {
    let codec = TriadCodec::default();
    std::thread::scope(|scope| {
        for name in PITCH_CLASS_NAMES {
            let codec = &codec;
            scope.spawn(move || {
                let label = format!("{}dim", name);
                assert_eq!(codec.decode(codec.encode(&label).unwrap()).unwrap(), label);
            });
        }
    });
}

const MINOR_ONLY: &[Band] = &[Band {
    quality: TriadQuality::Minor,
    suffix: "m",
}];

#[test]
fn test_custom_band_table() {
    let codec = ChordBandEncoding::new(ChordSymbolFunctions, "minor-only", MINOR_ONLY).unwrap();
    assert_eq!(codec.num_classes(), 13);
    assert_eq!(codec.bands(), MINOR_ONLY);
    assert_eq!(codec.scheme(), "minor-only");
    assert_eq!(codec.encode("Am").unwrap(), 10);
    assert_eq!(codec.decode(10).unwrap(), "Am");
    assert!(matches!(
        codec.encode("A"),
        Err(EncodingError::UnsupportedQuality { scheme: "minor-only", .. })
    ));
    assert!(matches!(
        codec.decode(13),
        Err(EncodingError::IndexOutOfRange { index: 13, num_classes: 13 })
    ));
}

#[test]
fn test_custom_band_table_validation() {
    const EMPTY: &[Band] = &[];
    const WITH_OTHER: &[Band] = &[Band {
        quality: TriadQuality::Other,
        suffix: "?",
    }];
    const DUPLICATE: &[Band] = &[
        Band {
            quality: TriadQuality::Major,
            suffix: "",
        },
        Band {
            quality: TriadQuality::Major,
            suffix: "maj",
        },
    ];

    for bands in [EMPTY, WITH_OTHER, DUPLICATE] {
        assert!(matches!(
            ChordBandEncoding::new(ChordSymbolFunctions, "bad", bands),
            Err(EncodingError::Config(_))
        ));
    }

    assert!(ChordBandEncoding::new(ChordSymbolFunctions, "triad", TRIAD_BANDS).is_ok());
}

#[test]
fn test_band_encoding_is_one_hot() {
    let codec = ChordBandEncoding::new(ChordSymbolFunctions, "minor-only", MINOR_ONLY).unwrap();
    assert_eq!(OneHotEncoding::num_classes(&codec), 13);
    assert_eq!(codec.default_event(), NO_CHORD);
    let progression = vec!["Dm".to_string(), NO_CHORD.to_string(), "Em".to_string()];
    let indices = codec.encode_events(&progression).unwrap();
    assert_eq!(indices, vec![3, 0, 5]);
    assert_eq!(codec.decode_events(&indices).unwrap(), progression);
}

#[test]
fn test_codecs_share_band_encoding() {
    let triad = TriadCodec::default();
    assert_eq!(triad.band_encoding().bands(), TRIAD_BANDS);
    assert_eq!(OneHotEncoding::num_classes(&triad), 49);
    assert_eq!(triad.encode_event(&"Baug".to_string()).unwrap(), 36);

    let major_minor = MajorMinorCodec::default();
    assert_eq!(major_minor.band_encoding().bands(), MAJOR_MINOR_BANDS);
    assert_eq!(major_minor.band_encoding().scheme(), "major-minor");

    let any = AnyChordCodec::new(EncodingScheme::Triad, ChordSymbolFunctions);
    assert_eq!(any.band_encoding().bands(), TRIAD_BANDS);
    assert_eq!(OneHotEncoding::num_classes(&any), 49);
}

#[test]
fn test_scheme_band_tables() {
    assert_eq!(EncodingScheme::MajorMinor.bands(), MAJOR_MINOR_BANDS);
    assert_eq!(EncodingScheme::Triad.bands(), TRIAD_BANDS);
    assert_eq!(band_classes(TRIAD_BANDS), 49);
    assert_eq!(band_classes(MAJOR_MINOR_BANDS), 25);
}
