//! Tail reader: show the end of a file once, or follow it as it grows.
//!
//! - [`snapshot`] reads a bounded look-back window from the end of the file
//!   and returns its last few lines.
//! - [`Follower`] polls for appended data and yields complete lines only.
pub mod follow;

pub use follow::{FollowState, Follower, FOLLOW_POLL_INTERVAL};

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use tracing::debug;

/// Bytes read back from the end of the file in snapshot mode.
///
/// Bounds memory for arbitrarily large files. The first line after the seek
/// point may be partial.
pub const SNAPSHOT_LOOKBACK_BYTES: u64 = 1024;

/// Maximum lines returned by [`snapshot`].
pub const SNAPSHOT_MAX_LINES: usize = 10;

/// Return the last [`SNAPSHOT_MAX_LINES`] lines of `path`, each stripped of
/// trailing whitespace.
pub fn snapshot(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
    let size = file
        .metadata()
        .map_err(|e| Error::unreadable(path, e))?
        .len();
    let start = size.saturating_sub(SNAPSHOT_LOOKBACK_BYTES);
    file.seek(SeekFrom::Start(start))
        .map_err(|e| Error::unreadable(path, e))?;

    let mut buf = Vec::with_capacity((size - start) as usize);
    file.read_to_end(&mut buf)
        .map_err(|e| Error::unreadable(path, e))?;

    debug!(
        "Snapshot of {}: read {} bytes from offset {}",
        path.display(),
        buf.len(),
        start
    );
    Ok(last_lines(&String::from_utf8_lossy(&buf), SNAPSHOT_MAX_LINES))
}

fn last_lines(text: &str, max: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    lines[lines.len().saturating_sub(max)..]
        .iter()
        .map(|line| line.trim_end().to_owned())
        .collect()
}

/// Copy followed lines to `out` verbatim until cancelled.
///
/// Each line is flushed as soon as it is complete so a downstream pager or
/// `grep` sees it immediately. Returns the number of lines written.
pub fn stream_to<W: Write>(
    follower: &mut Follower,
    out: &mut W,
    cancel: &AtomicBool,
) -> Result<u64> {
    let mut written: u64 = 0;
    while let Some(line) = follower.next_line(cancel)? {
        out.write_all(line.as_bytes()).map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;
        written += 1;
    }
    debug!(
        "Follow of {} ended after {} lines",
        follower.path().display(),
        written
    );
    Ok(written)
}
