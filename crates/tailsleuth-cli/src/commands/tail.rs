//! `tailsleuth tail`: the end of the newest log file, once or continuously.
use anyhow::Context;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tailsleuth_core::tail::{self, Follower};
use tailsleuth_core::{selector, Config};
use tracing::info;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let cancel = Arc::new(AtomicBool::new(false));
    if config.follow {
        let flag = Arc::clone(&cancel);
        ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))
            .context("failed to install Ctrl-C handler")?;
    }

    let mut out = io::stdout().lock();
    super::ignore_broken_pipe(tail_logs(config, &mut out, &mut io::stderr(), &cancel))
}

/// Pick the newest file under the log root and copy its tail to `out`.
///
/// The file name goes to `notice` so `out` carries file content only. In
/// follow mode this returns once `cancel` is set.
pub fn tail_logs<W: Write, N: Write>(
    config: &Config,
    out: &mut W,
    notice: &mut N,
    cancel: &AtomicBool,
) -> anyhow::Result<()> {
    let entry = match selector::newest(&config.log_dir) {
        Ok(entry) => entry,
        Err(e) if e.is_informational() => {
            writeln!(notice, "{e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(
        notice,
        "Tailing the most recent log file: {}",
        entry.path.display()
    )?;

    if config.follow {
        let mut follower = Follower::open(&entry.path)?;
        let lines = tail::stream_to(&mut follower, out, cancel)?;
        info!("Stopped following {} after {lines} lines", entry.path.display());
    } else {
        for line in tail::snapshot(&entry.path)? {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
    }
    Ok(())
}
