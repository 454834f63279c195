use crate::display;
use crate::logger::SnapshotLogger;
use crate::snapshot::SnapshotBuilder;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// The polling loop: render the first snapshot unconditionally, then sleep,
/// rebuild, and redraw only when the rendered state changed. The stop flag
/// is observed at iteration boundaries; a cycle that has started runs to
/// completion.
pub struct Monitor {
    builder: SnapshotBuilder,
    logger: SnapshotLogger,
    interval: Duration,
    stop: Arc<AtomicBool>,
}

impl Monitor {
    pub fn new(
        builder: SnapshotBuilder,
        logger: SnapshotLogger,
        interval: Duration,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            builder,
            logger,
            interval,
            stop,
        }
    }

    /// Run until interrupted. A failed snapshot build (unreadable table)
    /// propagates out and ends the process; there is no retry.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut last = self.builder.build()?;
        display::render(&last, true)?;
        self.logger.log_snapshot(&last)?;

        while !self.stop.load(Ordering::SeqCst) {
            thread::sleep(self.interval);
            if self.stop.load(Ordering::SeqCst) {
                break;
            }

            let next = self.builder.build()?;
            if next != last {
                display::render(&next, true)?;
                self.logger.log_snapshot(&next)?;
                last = next;
            }
        }

        println!("Program stopped!");
        Ok(())
    }
}
