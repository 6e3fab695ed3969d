//! JSON export of a filmography
//!
//! One file per run, named after the actor, overwritten if it exists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ImdbError, Result};
use crate::types::Filmography;

/// Indentation of the exported document
const INDENT: &[u8] = b"    ";

/// File name for an actor's export: spaces become underscores.
///
/// # Examples
/// ```
/// use imdb_core::export::export_file_name;
///
/// assert_eq!(export_file_name("Tom Cruise"), "Tom_Cruise_movies.json");
/// ```
pub fn export_file_name(subject_name: &str) -> String {
    format!("{}_movies.json", subject_name.replace(' ', "_"))
}

/// Render a filmography as pretty-printed JSON.
///
/// Non-ASCII characters are written as-is, not escaped.
pub fn to_pretty_json(filmography: &Filmography) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        filmography.serialize(&mut serializer)?;
    }
    String::from_utf8(buf)
        .map_err(|e| ImdbError::Json(<serde_json::Error as serde::ser::Error>::custom(e)))
}

/// Write a filmography to `<dir>/<Actor_Name>_movies.json`.
///
/// # Returns
/// The path of the written file.
pub fn write_filmography(filmography: &Filmography, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(&filmography.subject_name));
    fs::write(&path, to_pretty_json(filmography)?)?;

    tracing::info!(path = %path.display(), titles = filmography.titles.len(), "exported filmography");
    Ok(path)
}
