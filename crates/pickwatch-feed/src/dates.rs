use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Parse an RFC 2822 publication date into a timezone-aware instant.
///
/// Feeds occasionally omit the zone; those are assumed UTC. Anything else
/// unparsable yields `None` — a bad date never aborts the batch.
pub(crate) fn parse_pub_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(trimmed, "%a, %d %b %Y %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc2822_with_offset() {
        let parsed = parse_pub_date("Tue, 11 Mar 2025 08:15:00 +0200").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-03-11T08:15:00+02:00");
    }

    #[test]
    fn parses_rfc2822_with_gmt_zone_name() {
        let parsed = parse_pub_date("Tue, 11 Mar 2025 08:15:00 GMT").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-03-11T08:15:00+00:00");
    }

    #[test]
    fn missing_zone_is_assumed_utc() {
        let parsed = parse_pub_date("Tue, 11 Mar 2025 08:15:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-03-11T08:15:00+00:00");
    }

    #[test]
    fn garbage_and_empty_yield_none() {
        assert_eq!(parse_pub_date(""), None);
        assert_eq!(parse_pub_date("   "), None);
        assert_eq!(parse_pub_date("yesterday-ish"), None);
        assert_eq!(parse_pub_date("2025-03-11"), None);
    }
}
