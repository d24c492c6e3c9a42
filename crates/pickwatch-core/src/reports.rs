use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One normalized syndication item.
///
/// Every field degrades to `None` rather than failing the batch; a feed item
/// with no parsable date or no source element still yields a report.
/// `guessed_locations` is omitted from the JSON encoding when empty, while the
/// other absent fields serialize as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    /// Publication instant with its original offset; `None` when the feed's
    /// date string was missing or unparsable.
    pub published_at: Option<DateTime<FixedOffset>>,
    pub source: Option<String>,
    /// Heuristic location guesses, distinct, in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guessed_locations: Vec<String>,
}

/// One persisted snapshot of a collection run. Immutable once written:
/// the daily log is append-only and never read back by the collector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// UTC instant the run executed.
    pub timestamp: DateTime<Utc>,
    /// The fully combined search expression actually sent to the feed.
    pub query: String,
    /// The raw user-supplied filter, if any.
    pub requested_query: Option<String>,
    /// The exact URL fetched.
    pub feed_url: String,
    pub report_count: usize,
    pub reports: Vec<Report>,
}

impl CollectionEntry {
    /// Build an entry for one run. `report_count` is derived from
    /// `reports.len()`, so the count invariant holds by construction.
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        query: String,
        requested_query: Option<String>,
        feed_url: String,
        reports: Vec<Report>,
    ) -> Self {
        Self {
            timestamp,
            query,
            requested_query,
            feed_url,
            report_count: reports.len(),
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_report() -> Report {
        Report {
            headline: Some("Pickpocket gang arrested".to_string()),
            summary: None,
            link: Some("https://example.com/a".to_string()),
            published_at: None,
            source: Some("Example Times".to_string()),
            guessed_locations: Vec::new(),
        }
    }

    #[test]
    fn report_count_matches_reports_len() {
        let entry = CollectionEntry::new(
            Utc::now(),
            "q".to_string(),
            None,
            "https://example.com/rss".to_string(),
            vec![sample_report(), sample_report()],
        );
        assert_eq!(entry.report_count, 2);
        assert_eq!(entry.report_count, entry.reports.len());
    }

    #[test]
    fn empty_guessed_locations_are_omitted_from_json() {
        let json = serde_json::to_value(sample_report()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("guessed_locations"));
        // Absent scalar fields stay visible as explicit nulls.
        assert!(obj["summary"].is_null());
        assert!(obj["published_at"].is_null());
    }

    #[test]
    fn non_empty_guessed_locations_are_serialized_in_order() {
        let mut report = sample_report();
        report.guessed_locations = vec!["Paris".to_string(), "Gare du Nord".to_string()];
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["guessed_locations"],
            serde_json::json!(["Paris", "Gare du Nord"])
        );
    }

    #[test]
    fn entry_timestamp_serializes_as_rfc3339() {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 9, 12, 30, 0).unwrap();
        let entry = CollectionEntry::new(
            timestamp,
            "q".to_string(),
            Some("Paris".to_string()),
            "https://example.com/rss".to_string(),
            Vec::new(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2025-03-09T12:30:00Z");
        assert_eq!(json["report_count"], 0);
        assert_eq!(json["requested_query"], "Paris");
    }
}
