//! Sectioned key/value parsing for the actions file
//!
//! The format is a small INI dialect:
//!
//! ```text
//! [item]
//! Wash the dishes = 5
//! "Go for a run" = 15
//!
//! [store]
//! Coffee = 20
//! ```
//!
//! A section starts at a line that is exactly `[name]` and ends at the next
//! line starting with `[`. Inside it, every line with an `=` is an entry;
//! everything else (blank lines, comments) is skipped.

use std::fs;
use std::path::Path;

use crate::error::{PointsError, PointsResult};

/// One `key = value` line from a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniEntry {
    /// Text before the first `=`, trimmed and quote-stripped
    pub key: String,
    /// Text after the first `=`, quote-stripped but otherwise untouched
    pub value: String,
}

/// Strip one leading and one trailing double quote, if present
///
/// The two ends are handled independently, so an unbalanced quote is
/// removed as well.
pub fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Collect the entries of `section` from `source`, in file order
///
/// A missing section yields no entries. More than `max` entries is a
/// capacity error rather than a silent truncation.
pub fn parse_section(source: &str, section: &str, max: usize) -> PointsResult<Vec<IniEntry>> {
    let header = format!("[{}]", section);
    let mut inside_section = false;
    let mut entries = Vec::new();

    for line in source.lines() {
        let line = line.trim_end_matches('\r');

        if !inside_section {
            inside_section = line == header;
            continue;
        }

        if line.starts_with('[') {
            break;
        }

        if let Some((key, value)) = line.split_once('=') {
            entries.push(IniEntry {
                key: strip_quotes(key.trim()).to_string(),
                value: strip_quotes(value).to_string(),
            });
        }
    }

    if entries.len() > max {
        return Err(PointsError::CapacityExceeded {
            section: section.to_string(),
            found: entries.len(),
            max,
        });
    }

    tracing::debug!(section, count = entries.len(), "parsed config section");
    Ok(entries)
}

/// Read `path` and collect the entries of `section`
pub fn read_section<P: AsRef<Path>>(
    path: P,
    section: &str,
    max: usize,
) -> PointsResult<Vec<IniEntry>> {
    let source = read_source(path)?;
    parse_section(&source, section, max)
}

/// Read the whole configuration file
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejecting the file.
pub fn read_source<P: AsRef<Path>>(path: P) -> PointsResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|e| PointsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    match String::from_utf8(bytes) {
        Ok(source) => Ok(source),
        Err(e) => {
            tracing::warn!(path = %path.display(), "actions file is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
