//! Follow mode: poll a file for appended lines.
//!
//! No OS change notifications are used: the follower re-reads from its
//! cursor and sleeps [`FOLLOW_POLL_INTERVAL`] when nothing new has arrived.
//! This behaves correctly while another process appends concurrently.
//!
//! # States
//!
//! ```text
//! AwaitingData --line complete--> Emitting --next poll--> AwaitingData
//! AwaitingData --no data, sleep--> AwaitingData
//! any          --cancel / I/O error--> Closed
//! ```
//!
//! A line is only emitted once its `\n` has been read. Partial trailing data
//! is held across polls, so a writer flushing half a line never produces two
//! fragments.
//!
//! If the file shrinks below the cursor, the offset stays put until the file
//! grows past it again. The bytes then found at the old offset belong to some
//! line of the new content, so everything up to the next `\n` is discarded.
//! A truncate and regrow that both happen between two polls cannot be seen
//! and will surface as a fragment.
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Delay between polls when no new data is available.
pub const FOLLOW_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowState {
    /// At the end of the file, waiting for more data.
    AwaitingData,
    /// The last poll produced a complete line.
    Emitting,
    /// Cancelled or failed. The file handle has been released.
    Closed,
}

/// Open file plus the byte offset of everything consumed so far.
///
/// The offset never decreases while following.
struct TailCursor {
    reader: BufReader<File>,
    offset: u64,
}

pub struct Follower {
    path: PathBuf,
    /// `None` once closed, which drops the file handle.
    cursor: Option<TailCursor>,
    /// Bytes of an incomplete line read so far.
    pending: Vec<u8>,
    poll_interval: Duration,
    state: FollowState,
    /// Set after a truncation: drop data up to the next newline.
    resync: bool,
}

impl Follower {
    /// Open `path` positioned at its current end.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_poll_interval(path, FOLLOW_POLL_INTERVAL)
    }

    pub fn with_poll_interval(path: impl Into<PathBuf>, poll_interval: Duration) -> Result<Self> {
        let path = path.into();
        let mut file = File::open(&path).map_err(|e| Error::unreadable(&path, e))?;
        let offset = file
            .seek(SeekFrom::End(0))
            .map_err(|e| Error::unreadable(&path, e))?;

        debug!("Following {} from offset {}", path.display(), offset);

        Ok(Self {
            path,
            cursor: Some(TailCursor {
                reader: BufReader::new(file),
                offset,
            }),
            pending: Vec::new(),
            poll_interval,
            state: FollowState::AwaitingData,
            resync: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    /// Bytes consumed from the file, including any buffered partial line.
    pub fn offset(&self) -> u64 {
        self.cursor.as_ref().map_or(0, |c| c.offset)
    }

    /// Make one non-blocking read attempt.
    ///
    /// Returns `Ok(Some(line))` with the trailing newline intact when a line
    /// completed, `Ok(None)` when no complete line is available yet (or the
    /// follower is closed). An I/O failure closes the follower.
    pub fn poll(&mut self) -> Result<Option<String>> {
        let Some(cursor) = self.cursor.as_mut() else {
            return Ok(None);
        };

        let read = loop {
            let read = match cursor.reader.read_until(b'\n', &mut self.pending) {
                Ok(n) => n,
                Err(e) => {
                    self.close();
                    return Err(Error::unreadable(&self.path, e));
                }
            };
            cursor.offset += read as u64;

            if self.pending.last() != Some(&b'\n') {
                break read;
            }
            if self.resync {
                debug!(
                    "Dropped {} bytes of a partial line in {}",
                    self.pending.len(),
                    self.path.display()
                );
                self.pending.clear();
                self.resync = false;
                continue;
            }
            self.state = FollowState::Emitting;
            let line = String::from_utf8_lossy(&self.pending).into_owned();
            self.pending.clear();
            return Ok(Some(line));
        };

        self.state = FollowState::AwaitingData;
        if read == 0 {
            self.check_truncation();
        }
        Ok(None)
    }

    /// Block until the next complete line arrives.
    ///
    /// Returns `Ok(None)` once `cancel` is set; the follower is then closed.
    /// The flag is checked once per poll, so cancellation takes effect within
    /// one poll interval.
    pub fn next_line(&mut self, cancel: &AtomicBool) -> Result<Option<String>> {
        loop {
            if cancel.load(Ordering::Relaxed) {
                self.close();
                return Ok(None);
            }
            if let Some(line) = self.poll()? {
                return Ok(Some(line));
            }
            if self.state == FollowState::Closed {
                return Ok(None);
            }
            std::thread::sleep(self.poll_interval);
        }
    }

    /// Release the file handle. Idempotent.
    pub fn close(&mut self) {
        if self.cursor.take().is_some() {
            debug!("Closed follower on {}", self.path.display());
        }
        self.state = FollowState::Closed;
    }

    fn check_truncation(&mut self) {
        if self.resync {
            return;
        }
        let Some(cursor) = self.cursor.as_ref() else {
            return;
        };
        if let Ok(meta) = cursor.reader.get_ref().metadata() {
            if meta.len() < cursor.offset {
                warn!(
                    "{} shrank below the read offset ({} < {}); waiting for it to grow",
                    self.path.display(),
                    meta.len(),
                    cursor.offset
                );
                self.pending.clear();
                self.resync = true;
            }
        }
    }
}
