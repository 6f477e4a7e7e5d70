//! TailSleuth Core: log selection, tailing, and rate estimation.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! It is designed to be reusable across different frontends (CLI, TUI).
//!
//! # Modules
//!
//! - [`selector`]: Newest-first enumeration of files beneath a log root.
//! - [`tail`]: One-shot snapshot and polling follow mode for a single file.
//! - [`rate`]: Windowed arrival rate, running statistics, and the periodic
//!   status reporter.
//! - [`config`]: Typed run configuration with defaults and validation.
//! - [`error`]: Error type shared by every module.
pub mod config;
pub mod error;
pub mod rate;
pub mod selector;
pub mod tail;

pub use config::Config;
pub use error::{Error, Result};
