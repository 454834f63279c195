//! Validation for user-supplied arguments.

use crate::error::{ConnwatchError, Result};
use std::path::Path;

/// Minimum allowed poll interval in seconds
const MIN_POLL_INTERVAL: u64 = 1;

/// Maximum allowed poll interval in seconds
const MAX_POLL_INTERVAL: u64 = 3600;

/// Maximum allowed length for log file paths
const MAX_PATH_LEN: usize = 4096;

pub fn validate_poll_interval(secs: u64) -> Result<()> {
    if secs < MIN_POLL_INTERVAL {
        return Err(ConnwatchError::Config(format!(
            "Poll interval too small (min {MIN_POLL_INTERVAL} second)"
        )));
    }

    if secs > MAX_POLL_INTERVAL {
        return Err(ConnwatchError::Config(format!(
            "Poll interval too large (max {MAX_POLL_INTERVAL} seconds)"
        )));
    }

    Ok(())
}

pub fn validate_log_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConnwatchError::Config(
            "Log file path cannot be empty".to_string(),
        ));
    }

    if path.len() > MAX_PATH_LEN {
        return Err(ConnwatchError::Config(format!(
            "Log file path too long (max {MAX_PATH_LEN} characters)"
        )));
    }

    if path.contains('\0') || path.chars().any(|c| c.is_control()) {
        return Err(ConnwatchError::Config(
            "Invalid characters in log file path".to_string(),
        ));
    }

    if Path::new(path).is_dir() {
        return Err(ConnwatchError::Config(format!(
            "Log file path is a directory: {path}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_bounds() {
        assert!(validate_poll_interval(1).is_ok());
        assert!(validate_poll_interval(60).is_ok());
        assert!(validate_poll_interval(3600).is_ok());

        assert!(validate_poll_interval(0).is_err());
        assert!(validate_poll_interval(3601).is_err());
    }

    #[test]
    fn test_log_path_rejects_control_chars() {
        assert!(validate_log_path("connwatch.log").is_ok());
        assert!(validate_log_path("/tmp/conn.log").is_ok());

        assert!(validate_log_path("").is_err());
        assert!(validate_log_path("bad\0path").is_err());
        assert!(validate_log_path("bad\npath").is_err());
    }

    #[test]
    fn test_log_path_rejects_directory() {
        assert!(validate_log_path("/tmp").is_err());
    }
}
