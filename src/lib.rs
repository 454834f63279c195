//! # connwatch
//!
//! A live TCP/UDP connection monitor for Linux, driven by the kernel's
//! `/proc/net` connection tables.
//!
//! ## Features
//!
//! - Polls `/proc/net/tcp` and `/proc/net/udp` and redraws only on change
//! - Correlates each socket to its owning process via `/proc/<pid>/fd`
//! - Optional reverse-DNS resolution of remote endpoints
//! - Optional timestamped snapshot log
//!
//! ## Example
//!
//! ```rust,no_run
//! use connwatch::cli::Args;
//! use connwatch::run;
//!
//! let args = Args {
//!     tcp: true,
//!     once: true,
//!     interval: 1,
//!     ..Default::default()
//! };
//!
//! run(args).expect("Failed to run connwatch");
//! ```

pub mod cli;
pub mod config;
pub mod connections;
pub mod display;
pub mod error;
pub mod hostname;
pub mod logger;
pub mod monitor;
pub mod processes;
pub mod snapshot;
pub mod validation;

use anyhow::Result;
use cli::Args;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Main entry point for the connwatch application.
///
/// Validates the arguments, builds the runtime configuration, and either
/// prints a single snapshot (`--once`) or installs the interrupt handler
/// and enters the polling loop.
///
/// # Errors
///
/// Fails when arguments are invalid, when a requested connection table
/// cannot be read (run as root to see other users' sockets), or when the
/// interrupt handler cannot be installed.
pub fn run(args: Args) -> Result<()> {
    args.validate()?;

    let config = config::Config::from_args(&args);
    let builder = snapshot::SnapshotBuilder::new(config.clone());
    let mut logger = logger::SnapshotLogger::new(config.log_file.clone())?;

    if config.once {
        let snapshot = builder.build()?;
        display::render(&snapshot, false)?;
        logger.log_snapshot(&snapshot)?;
        return Ok(());
    }

    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {e}"))?;

    let mut monitor = monitor::Monitor::new(builder, logger, config.interval, stop);
    monitor.run()
}
