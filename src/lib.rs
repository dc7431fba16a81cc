//! Precomputed MIDI note frequency tables.
//!
//! Computes the equal-tempered frequency of every MIDI note 0-127 for a given
//! A4 reference and renders the result as lines of a C `float` array
//! initializer, ready to be `#include`d from firmware sources.

#![warn(missing_docs)]

pub mod note;
pub mod output;
pub mod table;

pub use note::{
    frequency_to_midi_note, is_black_key, midi_note_name, midi_note_to_frequency, note_octave,
    pitch_class_name, Spelling, A4_MIDI_NOTE, DEFAULT_A4_FREQUENCY, NUM_MIDI_NOTES,
};
pub use output::write_table;
pub use table::{format_line, format_table, generate_table, NoteEntry, TableOptions, HEADER};
