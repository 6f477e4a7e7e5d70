//! Recent-file selector: every regular file beneath a log root, newest first.
//!
//! Uses `jwalk` for the directory walk, with symlinks not followed and hidden
//! files included. The walker sorts siblings by name, so entries with
//! identical modification times come back in a stable order.
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// A file found beneath the log root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// One row of the listing: when, where (relative to the root), and what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub timestamp: DateTime<Local>,
    /// Parent directory relative to the log root, `"."` for the root itself.
    pub directory: CompactString,
    pub filename: CompactString,
}

/// List every regular file under `root`, sorted descending by modification
/// time.
///
/// An empty or missing directory yields an empty vec. Entries that cannot be
/// read (permission denied, vanished mid-walk) are skipped.
pub fn list_recent(root: &Path) -> Result<Vec<FileEntry>> {
    if !root.exists() {
        warn!("Log directory {} does not exist", root.display());
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        warn!("Log directory {} is not a directory", root.display());
        return Ok(Vec::new());
    }

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    let mut entries = Vec::new();
    let mut skipped: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                skipped += 1;
                warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        // Stat outside the walker; this is the expensive syscall.
        let modified = match std::fs::symlink_metadata(&path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(err) => {
                skipped += 1;
                warn!("Skipping {}: {err}", path.display());
                continue;
            }
        };

        entries.push(FileEntry { path, modified });
    }

    // Stable: equal timestamps keep the walker's name order.
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));

    debug!(
        "Found {} files under {} ({} skipped)",
        entries.len(),
        root.display(),
        skipped
    );
    Ok(entries)
}

/// The most recently modified file under `root`.
///
/// Returns [`Error::DirectoryEmpty`] when there is nothing to tail.
pub fn newest(root: &Path) -> Result<FileEntry> {
    list_recent(root)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::DirectoryEmpty(root.to_path_buf()))
}

/// Convert the first `max` entries into listing rows relative to `root`.
pub fn listing_rows(root: &Path, entries: &[FileEntry], max: usize) -> Vec<ListingRow> {
    entries
        .iter()
        .take(max)
        .map(|entry| ListingRow {
            timestamp: DateTime::<Local>::from(entry.modified),
            directory: relative_dir(root, &entry.path),
            filename: entry
                .path
                .file_name()
                .map(|n| CompactString::new(n.to_string_lossy()))
                .unwrap_or_default(),
        })
        .collect()
}

fn relative_dir(root: &Path, path: &Path) -> CompactString {
    let parent = path.parent().unwrap_or(Path::new(""));
    let rel = parent.strip_prefix(root).unwrap_or(parent);
    if rel.as_os_str().is_empty() {
        CompactString::new(".")
    } else {
        CompactString::new(rel.to_string_lossy())
    }
}
