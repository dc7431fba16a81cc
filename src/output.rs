//! Table output to a file or standard output

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

/// Write the rendered table to `path`, or to stdout when `path` is `None`
pub fn write_table(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            debug!("writing table to '{}'", path.display());
            let file = File::create(path)
                .with_context(|| format!("unable to create output file '{}'", path.display()))?;
            write_to(BufWriter::new(file), text)
                .with_context(|| format!("unable to write output file '{}'", path.display()))?;
            info!("wrote {} bytes to '{}'", text.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_to(stdout.lock(), text).context("unable to write to stdout")?;
        }
    }

    Ok(())
}

fn write_to<W: Write>(mut writer: W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
