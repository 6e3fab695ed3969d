//! Filmography listing

use std::io::{self, Write};

use imdb_core::Filmography;

/// Write each title on its own line, in stored order.
pub fn display<W: Write>(filmography: &Filmography, out: &mut W) -> io::Result<()> {
    for title in &filmography.titles {
        writeln!(out, "{}", title)?;
    }
    Ok(())
}
