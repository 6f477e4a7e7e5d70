//! Command drivers.
//!
//! Each command has a `run` entry point bound to the process streams, and a
//! generic inner function taking writers so tests can capture output.
pub mod list;
pub mod rate;
pub mod tail;

use std::io;
use tracing::debug;

/// Treat a closed stdout (`tailsleuth list | head -3`) as a normal end.
pub(crate) fn ignore_broken_pipe(result: anyhow::Result<()>) -> anyhow::Result<()> {
    match result {
        Err(e) if is_broken_pipe(&e) => {
            debug!("Output closed early: {e}");
            Ok(())
        }
        other => other,
    }
}

/// The first recognised cause decides, so a read-side `Error::Input` never
/// matches through its wrapped `io::Error`.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    for cause in err.chain() {
        if let Some(core) = cause.downcast_ref::<tailsleuth_core::Error>() {
            return core.is_broken_pipe();
        }
        if let Some(json) = cause.downcast_ref::<serde_json::Error>() {
            return json.io_error_kind() == Some(io::ErrorKind::BrokenPipe);
        }
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return io_err.kind() == io::ErrorKind::BrokenPipe;
        }
    }
    false
}
