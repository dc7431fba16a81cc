//! Frequency table records and their C source rendering

use crate::note::{midi_note_name, midi_note_to_frequency, NUM_MIDI_NOTES};

/// Comment line emitted before the table body
pub const HEADER: &str = "/* Precomputed frequencies for MIDI notes 0–127 (C-1 to G9) */";

/// One row of the table
#[derive(Clone, Debug, PartialEq)]
pub struct NoteEntry {
    /// MIDI note number
    pub note: u8,
    /// Name with octave, e.g. `C#4/Db4`
    pub name: String,
    /// Frequency in Hz
    pub frequency: f64,
}

impl NoteEntry {
    /// Entry for `note` tuned against `a4_frequency`
    pub fn new(note: u8, a4_frequency: f64) -> Self {
        Self {
            note,
            name: midi_note_name(note),
            frequency: midi_note_to_frequency(note, a4_frequency),
        }
    }
}

/// Rendering options for [`format_table`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Wrap the body in `static const float <name>[128] = { ... };`
    pub array_name: Option<String>,
}

/// Compute all 128 entries in ascending note order
pub fn generate_table(a4_frequency: f64) -> Vec<NoteEntry> {
    (0..NUM_MIDI_NOTES as u8)
        .map(|note| NoteEntry::new(note, a4_frequency))
        .collect()
}

/// Render a single row: `    440.0000000000f,   /* 69: A4 */`
pub fn format_line(entry: &NoteEntry) -> String {
    // C tooling and the reference generator spell it lower-case
    let value = if entry.frequency.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.10}", entry.frequency)
    };

    format!("    {}f,   /* {}: {} */", value, entry.note, entry.name)
}

/// Render the header and every entry, one newline-terminated line each
pub fn format_table(entries: &[NoteEntry], options: &TableOptions) -> String {
    let mut ret = String::new();
    ret.push_str(HEADER);
    ret.push('\n');

    if let Some(name) = &options.array_name {
        ret.push_str(&format!(
            "static const float {}[{}] = {{\n",
            name,
            entries.len()
        ));
    }

    for entry in entries {
        ret.push_str(&format_line(entry));
        ret.push('\n');
    }

    if options.array_name.is_some() {
        ret.push_str("};\n");
    }

    ret
}
