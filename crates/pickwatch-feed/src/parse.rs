//! RSS feed parsing into normalized reports.

use quick_xml::events::Event;
use quick_xml::Reader;

use pickwatch_core::Report;

use crate::dates;
use crate::error::FeedError;
use crate::locations;

/// Parse an RSS XML body into up to `limit` [`Report`]s.
///
/// `<item>` elements are taken in document order — the feed is not filtered
/// or re-sorted. For each item the title, link, description, publication
/// date, and source name are extracted; the source element is matched by
/// local name so both the Google-namespaced and plain forms are accepted.
/// Per-item anomalies (missing date, missing source) degrade to absent
/// fields and never abort the batch.
///
/// The reader is streaming and stops as soon as `limit` items have been
/// extracted, so XML errors after the last extracted item go unnoticed.
/// A DOM parser would reject the whole document instead; the early stop
/// is intentional, since everything past the limit is discarded anyway.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] when the body is not well-formed XML.
pub fn parse_feed_items(xml: &str, limit: usize) -> Result<Vec<Report>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut reports = Vec::new();
    let mut in_item = false;
    let mut in_description = false;
    let mut current_tag = String::new();
    let mut title = String::new();
    let mut link = String::new();
    let mut description = String::new();
    let mut pub_date = String::new();
    let mut source = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.local_name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                if name == "item" {
                    in_item = true;
                    in_description = false;
                    title.clear();
                    link.clear();
                    description.clear();
                    pub_date.clear();
                    source.clear();
                } else if name == "description" && in_item {
                    in_description = true;
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name_buf = e.local_name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if name == "description" {
                    in_description = false;
                }
                if name == "item" && in_item {
                    in_item = false;
                    reports.push(build_report(
                        &title,
                        &link,
                        &description,
                        &pub_date,
                        &source,
                    ));
                    if reports.len() >= limit {
                        break;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    if in_description {
                        // Accumulate all text nodes inside <description>,
                        // including those emitted after nested tags like <b>.
                        if !description.is_empty() {
                            description.push(' ');
                        }
                        description.push_str(&text);
                    } else {
                        match current_tag.as_str() {
                            "title" => title = text,
                            "link" => link = text,
                            "pubDate" => pub_date = text,
                            // First source element wins; Google feeds may carry
                            // both a namespaced and a plain one.
                            "source" if source.is_empty() => source = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if in_description {
                        description = strip_html(&text);
                    } else if current_tag == "title" {
                        title = text;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
    }

    Ok(reports)
}

fn build_report(title: &str, link: &str, description: &str, pub_date: &str, source: &str) -> Report {
    let guessed_locations = locations::guess_locations(&[title, description]);
    Report {
        headline: non_empty(title),
        summary: non_empty(description),
        link: non_empty(link),
        published_at: dates::parse_pub_date(pub_date),
        source: non_empty(source),
        guessed_locations,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip HTML tags from a string and normalize whitespace.
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
