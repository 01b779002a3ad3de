//! Input discovery: expand directory arguments into the `.py` files beneath
//! them.
//!
//! The walker honours `.gitignore` / `.ignore` files, skips hidden entries,
//! and always skips the directories in [`SKIPPED_DIRS`].  Callers can add
//! their own exclusions; a path is dropped when any of its components below
//! the root equals or contains one of them.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Virtual-environment, cache, build and VCS directories never worth
/// highlighting.
const SKIPPED_DIRS: &[&str] = &[
    "venv",
    "env",
    "virtualenv",
    "__pycache__",
    "build",
    "dist",
    "node_modules",
    ".git",
    ".hg",
    ".svn",
    ".venv",
    ".tox",
    ".nox",
    ".mypy_cache",
    ".pytest_cache",
];

fn is_python_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("py")
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    path.components().any(|component| {
        let Component::Normal(name) = component else {
            return false;
        };
        let name = name.to_string_lossy();
        SKIPPED_DIRS.contains(&name.as_ref())
            || exclude.iter().any(|pat| name.contains(pat.as_str()))
    })
}

/// Collect every `.py` file under `root`, sorted by path.
pub fn discover_python_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) || !is_python_file(path) {
            continue;
        }
        if is_excluded(path.strip_prefix(root).unwrap_or(path), exclude) {
            debug!(path = %path.display(), "excluded");
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "discovered python files");
    Ok(files)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
