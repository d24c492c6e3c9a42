//! Append-only daily JSONL persistence for collection entries.
//!
//! One file per UTC calendar day, named `<YYYY-MM-DD>.jsonl`, created lazily
//! on first write. Files are never rewritten, rotated, or compacted; the
//! collector is write-only with respect to this log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use pickwatch_core::CollectionEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write daily log: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Writer for the date-partitioned collection log.
#[derive(Debug, Clone)]
pub struct DailyLog {
    dir: PathBuf,
}

impl DailyLog {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Append `entry` as one JSON line to the log file for the entry's UTC day.
    ///
    /// The file is opened in append mode so concurrent runs never truncate
    /// earlier lines, and the whole line is written in a single `write_all`.
    /// Non-ASCII characters are emitted literally. Returns the resolved path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the entry cannot be encoded or the
    /// filesystem write fails; the caller treats this as fatal to the run.
    pub fn append(&self, entry: &CollectionEntry) -> Result<PathBuf, StoreError> {
        let path = self.path_for(entry);
        std::fs::create_dir_all(&self.dir)?;

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!(path = %path.display(), "appended collection entry");
        Ok(path)
    }

    /// The log file path for the UTC date of `entry.timestamp`.
    #[must_use]
    pub fn path_for(&self, entry: &CollectionEntry) -> PathBuf {
        self.dir
            .join(format!("{}.jsonl", entry.timestamp.format("%Y-%m-%d")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    use pickwatch_core::{CollectionEntry, Report};

    use super::*;

    fn entry_at(hour: u32, reports: Vec<Report>) -> CollectionEntry {
        CollectionEntry::new(
            Utc.with_ymd_and_hms(2025, 3, 9, hour, 0, 0).unwrap(),
            "base".to_string(),
            None,
            "https://example.com/rss".to_string(),
            reports,
        )
    }

    fn report_with_headline(headline: &str) -> Report {
        Report {
            headline: Some(headline.to_string()),
            summary: None,
            link: None,
            published_at: None,
            source: None,
            guessed_locations: Vec::new(),
        }
    }

    #[test]
    fn append_creates_file_named_for_the_utc_day() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path());

        let path = log.append(&entry_at(12, Vec::new())).unwrap();
        assert_eq!(path, dir.path().join("2025-03-09.jsonl"));
        assert!(path.exists());
    }

    #[test]
    fn appends_accumulate_one_intact_line_each() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path());

        log.append(&entry_at(8, Vec::new())).unwrap();
        log.append(&entry_at(9, vec![report_with_headline("second run")]))
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("2025-03-09.jsonl")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(contents.ends_with('\n'));

        // Every line is a complete JSON document on its own.
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed["report_count"].is_u64());
        }
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path());

        log.append(&entry_at(10, vec![report_with_headline("Vol à la tire à Paris")]))
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("2025-03-09.jsonl")).unwrap();
        assert!(contents.contains("Vol à la tire à Paris"));
        assert!(!contents.contains("\\u00e0"));
    }

    #[test]
    fn zero_report_entries_are_persisted() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path());

        log.append(&entry_at(11, Vec::new())).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("2025-03-09.jsonl")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(parsed["report_count"], 0);
        assert_eq!(parsed["reports"], serde_json::json!([]));
    }

    #[test]
    fn missing_data_dir_is_created_lazily() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("logs");
        let log = DailyLog::new(&nested);

        let path = log.append(&entry_at(7, Vec::new())).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
