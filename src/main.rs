use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{debug, warn};

use midi_freq_table::{format_table, generate_table, write_table, TableOptions};

fn parse_array_name(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(s.to_string())
    } else {
        Err(format!("'{}' is not a valid C identifier", s))
    }
}

/// Generate a C table of frequencies for MIDI notes 0-127 (C-1 to G9)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Concert pitch frequency for A4 in Hz
    #[arg(long, default_value_t = 440.0, allow_negative_numbers = true)]
    a4: f64,

    /// Write output to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Wrap the table in a `static const float NAME[128]` declaration
    #[arg(long, value_name = "NAME", value_parser = parse_array_name)]
    array: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    debug!("reference pitch A4 = {} Hz", args.a4);

    if !(args.a4.is_finite() && args.a4 > 0.0) {
        warn!(
            "reference pitch {} Hz is not a positive frequency, table values will be meaningless",
            args.a4
        );
    }

    let options = TableOptions {
        array_name: args.array,
    };
    let text = format_table(&generate_table(args.a4), &options);

    write_table(&text, args.out.as_deref())
}
