//! Tree-level stamping: discover markdown files, stamp each one in turn,
//! fold per-file outcomes into a summary.
//!
//! One file failing never stops the batch; only a missing root is fatal.

use crate::config::StampConfig;
use crate::document::Document;
use crate::error::{Result, StampError};
use crate::io;
use crate::metadata::Metadata;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// ---------------------------------------------------------------------------
// Outcome / Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Header written; carries the metadata that was inferred.
    Stamped(Metadata),
    /// Header already present; file untouched.
    Skipped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total: usize,
}

impl Summary {
    /// Fold one file's result into a new summary.
    pub fn record(self, result: &Result<Outcome>) -> Self {
        let mut next = Summary {
            total: self.total + 1,
            ..self
        };
        match result {
            Ok(Outcome::Stamped(_)) => next.processed += 1,
            Ok(Outcome::Skipped) => next.skipped += 1,
            Err(_) => next.errors += 1,
        }
        next
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// All files under `config.root` with the configured extension, sorted,
/// never descending into `config.exclude_dir`. Symlinks to regular files
/// are included; directory symlinks are not followed.
pub fn find_markdown_files(config: &StampConfig) -> Result<Vec<PathBuf>> {
    let root = &config.root;
    if !root.is_dir() {
        return Err(StampError::RootNotFound(root.clone()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != config.exclude_dir.as_str());
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        let matches_ext = entry
            .path()
            .extension()
            .and_then(|x| x.to_str())
            .is_some_and(|x| x == config.extension);
        if matches_ext {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Processing
// ---------------------------------------------------------------------------

/// Stamp a single file in place unless it already has a header.
pub fn process_file(path: &Path, config: &StampConfig) -> Result<Outcome> {
    let doc = Document::load(path)?;
    let Some((md, text)) = doc.stamped(config) else {
        tracing::debug!(path = %path.display(), "header present, skipping");
        return Ok(Outcome::Skipped);
    };
    io::atomic_write(path, text.as_bytes())?;
    tracing::debug!(
        path = %path.display(),
        doc_type = %md.doc_type,
        project = %md.project,
        "stamped"
    );
    Ok(Outcome::Stamped(md))
}

/// Stamp `files` in order, folding each result into the returned summary.
///
/// `on_file` sees each path with its result as soon as it is processed.
pub fn stamp_files<F>(files: &[PathBuf], config: &StampConfig, mut on_file: F) -> Summary
where
    F: FnMut(&Path, &Result<Outcome>),
{
    files.iter().fold(Summary::default(), |summary, path| {
        let result = process_file(path, config);
        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), error = %e, "failed to stamp");
        }
        on_file(path, &result);
        summary.record(&result)
    })
}

/// Events reported by [`stamp_tree`] while it runs.
#[derive(Debug)]
pub enum Progress<'a> {
    /// Discovery finished; these files are about to be stamped.
    Found(&'a [PathBuf]),
    /// One file was processed.
    File(&'a Path, &'a Result<Outcome>),
}

/// Discover and stamp every markdown file under the root.
pub fn stamp_tree<F>(config: &StampConfig, mut on_progress: F) -> Result<Summary>
where
    F: FnMut(Progress<'_>),
{
    let files = find_markdown_files(config)?;
    tracing::info!(root = %config.root.display(), files = files.len(), "stamping tree");
    on_progress(Progress::Found(&files));
    Ok(stamp_files(&files, config, |path, result| {
        on_progress(Progress::File(path, result))
    }))
}
