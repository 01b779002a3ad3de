use crate::scanner::scan;
use crate::types::TokenSpan;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One scanned input: its display name, full text and spans.
#[derive(Debug, Clone)]
pub struct HighlightedFile {
    pub path: String,
    pub source: String,
    pub spans: Vec<TokenSpan>,
}

impl HighlightedFile {
    /// Scan in-memory source under the given display name.
    pub fn from_source(path: impl Into<String>, source: String) -> Self {
        let spans = scan(&source);
        Self {
            path: path.into(),
            source,
            spans,
        }
    }
}

fn highlight_file(path: &Path) -> Result<HighlightedFile> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file = HighlightedFile::from_source(path.display().to_string(), source);
    debug!(path = %file.path, bytes = file.source.len(), spans = file.spans.len(), "scanned");
    Ok(file)
}

/// Read and scan every file in parallel.  Results keep the order of `files`;
/// the first file that cannot be read fails the whole batch.
pub fn highlight_files(files: &[PathBuf]) -> Result<Vec<HighlightedFile>> {
    files.par_iter().map(|path| highlight_file(path)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
