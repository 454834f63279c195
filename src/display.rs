use crate::connections::ConnectionRecord;
use crate::error::Result;
use crate::snapshot::Snapshot;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::stdout;

/// Column header matching the fixed-width row template.
pub fn header() -> String {
    format!(
        "{:<6} {:<14} {:<7} {:<7} {:<12} {:<5} {:<8} {}",
        "Proto", "Local address", "L_Port", "R_Port", "STATE", "PID", "Program", "Remote address"
    )
}

/// Format one decoded record into its fixed-width rendered line. Missing
/// owner fields render as blanks.
pub fn format_row(record: &ConnectionRecord) -> String {
    let pid = record
        .owner_pid
        .map(|p| p.to_string())
        .unwrap_or_default();
    let program = record.owner_program.as_deref().unwrap_or("");
    let remote = record
        .remote_host
        .clone()
        .unwrap_or_else(|| record.remote_addr.to_string());

    format!(
        "{:<6} {:<14} {:<7} {:<7} {:<12} {:<5} {:<8} {}",
        record.protocol.as_str(),
        record.local_addr.to_string(),
        record.local_port,
        record.remote_port,
        record.state.as_str(),
        pid,
        program,
        remote
    )
}

/// Redraw the table. On a live redraw the screen is cleared and the cursor
/// homed first; one-shot output skips the clear.
pub fn render(snapshot: &Snapshot, clear_screen: bool) -> Result<()> {
    if clear_screen {
        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    }

    println!("{}", header());
    println!("{}", "-".repeat(80));

    for line in snapshot.lines() {
        println!("{line}");
    }

    Ok(())
}
