//! Notification history command

use crate::config::TrackerPaths;
use crate::error::TrackerResult;
use crate::storage::NotificationLog;

/// Print the most recent budget alerts, oldest first
pub fn handle_notifications_command(paths: &TrackerPaths, count: usize) -> TrackerResult<()> {
    let log = NotificationLog::new(paths.notification_log());
    let lines = log.read_recent(count)?;

    if lines.is_empty() {
        println!("No budget notifications recorded.");
        return Ok(());
    }

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
