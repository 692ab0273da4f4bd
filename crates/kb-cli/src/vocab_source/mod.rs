//! Plain-text vocabulary files.
//!
//! One entry per line: `term<TAB>weight`. Blank lines and lines starting
//! with `#` are skipped. Later lines for the same term override earlier ones
//! once loaded, since the store keeps the last weight.

#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::Path;

use kb_core::suggest::WeightedTerm;
use kb_session::Language;

#[derive(Debug, thiserror::Error)]
pub enum VocabSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub fn parse_vocabulary(text: &str) -> Result<Vec<WeightedTerm>, VocabSourceError> {
    let mut terms = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_err = |reason: String| VocabSourceError::Parse {
            line: line_no,
            reason,
        };

        let (term, weight) = line
            .split_once('\t')
            .ok_or_else(|| parse_err("expected term<TAB>weight".to_string()))?;
        let term = term.trim();
        if term.is_empty() {
            return Err(parse_err("empty term".to_string()));
        }
        let weight: u32 = weight
            .trim()
            .parse()
            .map_err(|e| parse_err(format!("invalid weight {weight:?}: {e}")))?;
        terms.push(WeightedTerm::new(term, weight));
    }
    Ok(terms)
}

pub fn read_vocabulary(path: &Path) -> Result<Vec<WeightedTerm>, VocabSourceError> {
    let text = fs::read_to_string(path)?;
    parse_vocabulary(&text)
}

/// Load a vocabulary file as a language named after the file stem.
pub fn read_language(path: &Path) -> Result<Language, VocabSourceError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Language::new(name, read_vocabulary(path)?))
}
