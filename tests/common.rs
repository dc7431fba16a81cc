#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Run the generator binary with the given arguments
pub fn run_generator(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_midi-freq-table"))
        .args(args)
        .output()
        .expect("failed to launch midi-freq-table")
}

/// Data lines of a rendered table, i.e. everything but the header comment
pub fn data_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("    ")).collect()
}

/// Split `    440.0000000000f,   /* 69: A4 */` into (frequency, note, name)
pub fn parse_line(line: &str) -> (f64, u8, String) {
    let (value, comment) = line
        .trim()
        .split_once("f,   /* ")
        .unwrap_or_else(|| panic!("malformed line: {line:?}"));
    let (note, name) = comment
        .trim_end_matches(" */")
        .split_once(": ")
        .unwrap_or_else(|| panic!("malformed comment: {line:?}"));

    (
        value.parse().unwrap(),
        note.parse().unwrap(),
        name.to_string(),
    )
}

/// Unique scratch path under the system temp directory
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("midi-freq-table-{}-{}", std::process::id(), name))
}
