//! End-to-end selector tests against a real temporary filesystem.
//!
//! Modification times are set explicitly so ordering does not depend on how
//! fast the files happen to be written.
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tailsleuth_core::selector::{list_recent, listing_rows, newest};
use tailsleuth_core::Error;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Write `path` (creating parents) and stamp it `secs` after the epoch.
fn write_at(path: &Path, secs: u64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"log line\n").unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

/// ```text
/// root/
///   rule_a/
///     1.log   (t=100)
///     2.log   (t=300)
///   rule_b/
///     deep/
///       3.log (t=200)
///   top.log   (t=50)
/// ```
fn build_log_tree(root: &Path) {
    write_at(&root.join("rule_a/1.log"), 100);
    write_at(&root.join("rule_a/2.log"), 300);
    write_at(&root.join("rule_b/deep/3.log"), 200);
    write_at(&root.join("top.log"), 50);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn lists_every_file_newest_first() {
    let tmp = TempDir::new().unwrap();
    build_log_tree(tmp.path());

    let entries = list_recent(tmp.path()).unwrap();
    let names: Vec<_> = entries
        .iter()
        .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["2.log", "3.log", "1.log", "top.log"]);
}

#[test]
fn directories_are_not_listed() {
    let tmp = TempDir::new().unwrap();
    build_log_tree(tmp.path());
    fs::create_dir_all(tmp.path().join("empty_rule")).unwrap();

    let entries = list_recent(tmp.path()).unwrap();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| e.path.is_file()));
}

#[test]
fn hidden_files_are_included() {
    let tmp = TempDir::new().unwrap();
    write_at(&tmp.path().join(".hidden.log"), 10);

    let entries = list_recent(tmp.path()).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn empty_directory_is_an_empty_listing() {
    let tmp = TempDir::new().unwrap();
    assert!(list_recent(tmp.path()).unwrap().is_empty());
}

#[test]
fn newest_in_empty_directory_is_directory_empty() {
    let tmp = TempDir::new().unwrap();
    let err = newest(tmp.path()).unwrap_err();
    assert!(err.is_informational());
    assert!(matches!(err, Error::DirectoryEmpty(ref p) if p == tmp.path()));
}

#[test]
fn newest_picks_the_latest_modification() {
    let tmp = TempDir::new().unwrap();
    build_log_tree(tmp.path());
    let entry = newest(tmp.path()).unwrap();
    assert_eq!(entry.path, tmp.path().join("rule_a/2.log"));
}

#[test]
fn identical_timestamps_keep_a_stable_order() {
    let tmp = TempDir::new().unwrap();
    for name in ["c.log", "a.log", "b.log"] {
        write_at(&tmp.path().join(name), 500);
    }

    let first = list_recent(tmp.path()).unwrap();
    let second = list_recent(tmp.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn listing_is_capped_and_newest_first() {
    let tmp = TempDir::new().unwrap();
    for i in 0..25u64 {
        write_at(&tmp.path().join(format!("job_{i:02}.log")), 1_000 + i);
    }

    let entries = list_recent(tmp.path()).unwrap();
    let rows = listing_rows(tmp.path(), &entries, 10);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].filename, "job_24.log");
    assert_eq!(rows[9].filename, "job_15.log");
    assert!(rows.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn listing_rows_use_relative_directories() {
    let tmp = TempDir::new().unwrap();
    build_log_tree(tmp.path());

    let entries = list_recent(tmp.path()).unwrap();
    let rows = listing_rows(tmp.path(), &entries, 10);
    let dirs: Vec<_> = rows
        .iter()
        .map(|r| Path::new(r.directory.as_str()).to_path_buf())
        .collect();
    assert_eq!(
        dirs,
        [
            Path::new("rule_a"),
            Path::new("rule_b/deep"),
            Path::new("rule_a"),
            Path::new("."),
        ]
    );
}
