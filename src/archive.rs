// ZIP archive of the matching PDFs
use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::types::{MatchResult, Result};

/// Packs the original bytes of every match into one in-memory ZIP, one
/// entry per match, in match order.
pub fn build_archive(matches: &[MatchResult<'_>]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let mut used = HashSet::new();

    for result in matches {
        let name = unique_entry_name(result.filename, &mut used);
        if name != result.filename {
            tracing::warn!("Duplicate archive entry '{}' stored as '{}'", result.filename, name);
        }
        zip.start_file(name.as_str(), options)?;
        zip.write_all(result.content)?;
    }

    let cursor = zip.finish()?;
    tracing::debug!(entries = matches.len(), "archive built");
    Ok(cursor.into_inner())
}

// "a.pdf", "a (2).pdf", "a (3).pdf", ...
fn unique_entry_name(filename: &str, used: &mut HashSet<String>) -> String {
    if used.insert(filename.to_string()) {
        return filename.to_string();
    }
    let (stem, ext) = match filename.rfind('.') {
        Some(dot) if dot > 0 => filename.split_at(dot),
        _ => (filename, ""),
    };
    let mut n = 2;
    loop {
        let candidate = format!("{} ({}){}", stem, n, ext);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
