//! Pitch class table shared by every codec.
//!
//! Both encode and decode go through this table, so the two codecs always
//! agree on root spelling.

/// Number of pitch classes in an octave (width of one class band)
pub const NOTES_PER_OCTAVE: usize = 12;

/// Canonical display name for each pitch class, indexed by semitones above C
pub const PITCH_CLASS_NAMES: [&str; NOTES_PER_OCTAVE] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Display name for a pitch class, or `None` if it is not in `[0, 12)`
pub fn pitch_class_name(pitch_class: usize) -> Option<&'static str> {
    PITCH_CLASS_NAMES.get(pitch_class).copied()
}

/// Note letter to semitone offset from C
pub fn letter_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Apply an accidental offset to a letter's semitone and wrap into `[0, 12)`
pub fn pitch_class(letter_semitone: i32, accidentals: i32) -> usize {
    (letter_semitone + accidentals).rem_euclid(NOTES_PER_OCTAVE as i32) as usize
}
