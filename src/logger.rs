use crate::snapshot::Snapshot;
use crate::validation;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Appends each rendered snapshot, timestamped, to a log sink. `"-"` logs
/// to stdout; `None` disables logging entirely.
pub struct SnapshotLogger {
    file: Option<std::fs::File>,
    use_stdout: bool,
}

impl SnapshotLogger {
    pub fn new(path: Option<String>) -> anyhow::Result<Self> {
        let (file, use_stdout) = if let Some(path) = path {
            if path == "-" {
                (None, true)
            } else {
                validation::validate_log_path(&path)?;
                let f = OpenOptions::new().create(true).append(true).open(path)?;
                (Some(f), false)
            }
        } else {
            (None, false)
        };

        Ok(Self { file, use_stdout })
    }

    pub fn log_snapshot(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if self.file.is_none() && !self.use_stdout {
            return Ok(());
        }

        let now = Local::now();
        let mut block = format!(
            "=== {} ({} connections) ===\n",
            now.format("%Y-%m-%d %H:%M:%S"),
            snapshot.lines().len()
        );
        for line in snapshot.lines() {
            block.push_str(line);
            block.push('\n');
        }

        match (&mut self.file, self.use_stdout) {
            (Some(f), _) => {
                f.write_all(block.as_bytes())?;
                f.flush()?;
            }
            (None, true) => print!("{block}"),
            _ => {}
        }

        Ok(())
    }
}
