//! MIDI note naming and equal-tempered tuning
//!
//! Note numbers follow the MIDI convention where 60 is middle C (C4) and 69 is
//! A4, the tuning anchor. Octaves are numbered `n / 12 - 1`, so note 0 is C-1
//! and note 127 is G9.

/// MIDI note number of A4, the tuning anchor
pub const A4_MIDI_NOTE: u8 = 69;

/// Concert pitch used when no reference is given (in Hz)
pub const DEFAULT_A4_FREQUENCY: f64 = 440.0;

/// Number of MIDI note numbers (0-127)
pub const NUM_MIDI_NOTES: usize = 128;

const SEMITONES_PER_OCTAVE: u8 = 12;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// How black keys are spelled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spelling {
    /// C#, D#, F#, G#, A#
    Sharps,
    /// Db, Eb, Gb, Ab, Bb
    Flats,
}

/// Pitch class name of a note, without octave
pub fn pitch_class_name(midi_note: u8, spelling: Spelling) -> &'static str {
    let pitch_class = (midi_note % SEMITONES_PER_OCTAVE) as usize;
    match spelling {
        Spelling::Sharps => SHARP_NAMES[pitch_class],
        Spelling::Flats => FLAT_NAMES[pitch_class],
    }
}

/// Whether the note sits on a black key (has an enharmonic flat spelling)
pub fn is_black_key(midi_note: u8) -> bool {
    pitch_class_name(midi_note, Spelling::Sharps) != pitch_class_name(midi_note, Spelling::Flats)
}

/// Octave number of a note, C4 = 60
pub fn note_octave(midi_note: u8) -> i8 {
    (midi_note / SEMITONES_PER_OCTAVE) as i8 - 1
}

/// Human-readable note name with octave.
///
/// Black keys carry both spellings, e.g. `C#4/Db4`; white keys carry one,
/// e.g. `D4`.
pub fn midi_note_name(midi_note: u8) -> String {
    let octave = note_octave(midi_note);
    let sharp = pitch_class_name(midi_note, Spelling::Sharps);

    if is_black_key(midi_note) {
        let flat = pitch_class_name(midi_note, Spelling::Flats);
        format!("{sharp}{octave}/{flat}{octave}")
    } else {
        format!("{sharp}{octave}")
    }
}

/// Equal-tempered frequency of a MIDI note for the given A4 reference.
///
/// `a4_frequency` is not validated; zero or negative references flow straight
/// through the formula.
pub fn midi_note_to_frequency(midi_note: u8, a4_frequency: f64) -> f64 {
    let semitones = midi_note as f64 - A4_MIDI_NOTE as f64;
    a4_frequency * 2.0_f64.powf(semitones / SEMITONES_PER_OCTAVE as f64)
}

/// Nearest MIDI note for a frequency, clamped to 0-127
pub fn frequency_to_midi_note(frequency: f64, a4_frequency: f64) -> u8 {
    let ratio = frequency / a4_frequency;
    if !(ratio.is_finite() && ratio > 0.0) {
        return 0;
    }

    let note = A4_MIDI_NOTE as f64 + SEMITONES_PER_OCTAVE as f64 * ratio.log2();
    note.round().clamp(0.0, 127.0) as u8
}
