//! Append-only log of budget notifications
//!
//! Each alert is written as one line, `[<timestamp>] <message>`, and flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{TrackerError, TrackerResult};

/// ISO-8601 local date-time, second precision
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Handles writing notification lines to the log file
#[derive(Debug, Clone)]
pub struct NotificationLog {
    log_path: PathBuf,
}

impl NotificationLog {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append a message stamped with the current local time
    pub fn append(&self, message: &str) -> TrackerResult<()> {
        self.append_at(message, Local::now().naive_local())
    }

    /// Append a message with an explicit timestamp
    pub fn append_at(&self, message: &str, timestamp: NaiveDateTime) -> TrackerResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrackerError::Io(format!("Failed to create log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open notification log: {}", e)))?;

        writeln!(file, "{}", format_line(message, timestamp))
            .map_err(|e| TrackerError::Io(format!("Failed to write notification: {}", e)))?;

        file.flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush notification log: {}", e)))?;

        Ok(())
    }

    /// Read all lines, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open notification log: {}", e)))?;

        let mut lines = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!(
                    "Failed to read notification log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if !line.trim().is_empty() {
                lines.push(line);
            }
        }

        Ok(lines)
    }

    /// Read the most recent N lines
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<String>> {
        let mut all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all.split_off(start))
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

fn format_line(message: &str, timestamp: NaiveDateTime) -> String {
    // keep one entry per line
    let message = message.replace(['\r', '\n'], " ");
    format!("[{}] {}", timestamp.format(TIMESTAMP_FORMAT), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_log() -> (NotificationLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log = NotificationLog::new(temp_dir.path().join("data").join("notifications.log"));
        (log, temp_dir)
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(hour, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_line_format() {
        let (log, _temp) = create_test_log();

        log.append_at("Budget exceeded", at(14)).unwrap();

        let lines = log.read_all().unwrap();
        assert_eq!(lines, vec!["[2025-03-09T14:05:07] Budget exceeded".to_string()]);
    }

    #[test]
    fn test_appends_instead_of_overwriting() {
        let (log, temp) = create_test_log();

        log.append_at("first", at(1)).unwrap();

        // a second handle on the same file, as after a restart
        let reopened = NotificationLog::new(temp.path().join("data").join("notifications.log"));
        reopened.append_at("second", at(2)).unwrap();

        let lines = reopened.read_all().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_multiline_message_stays_on_one_line() {
        let (log, _temp) = create_test_log();

        log.append_at("line one\nline two", at(3)).unwrap();

        assert_eq!(log.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_read_recent() {
        let (log, _temp) = create_test_log();

        for i in 0..10 {
            log.append_at(&format!("alert {}", i), at(i)).unwrap();
        }

        let recent = log.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("alert 7"));
        assert!(recent[2].ends_with("alert 9"));
    }

    #[test]
    fn test_empty_log() {
        let (log, _temp) = create_test_log();

        assert!(!log.exists());
        assert!(log.read_all().unwrap().is_empty());
    }
}
