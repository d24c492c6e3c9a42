//! Heuristic location extraction from headline and summary text.
//!
//! Not a gazetteer lookup: false positives and negatives are expected and
//! acceptable. Three patterns are scanned — `in <Capitalized Phrase>`,
//! `at <Capitalized Phrase>`, and a title-cased segment before the first
//! colon (the common "City: story" headline shape).

use regex::Regex;

/// Scan `texts` for likely location names.
///
/// Candidates are deduplicated preserving first-seen order across all texts
/// and patterns. Returns an empty vec when nothing matches.
#[must_use]
pub fn guess_locations(texts: &[&str]) -> Vec<String> {
    let patterns = [
        Regex::new(r"in ([A-Z][A-Za-z]+(?:[\s-][A-Z][A-Za-z]+)*)").expect("valid location regex"),
        Regex::new(r"at ([A-Z][A-Za-z]+(?:[\s-][A-Z][A-Za-z]+)*)").expect("valid location regex"),
    ];

    let mut candidates: Vec<String> = Vec::new();
    let push = |candidates: &mut Vec<String>, value: &str| {
        let normalized = value.trim();
        if !normalized.is_empty() && !candidates.iter().any(|c| c == normalized) {
            candidates.push(normalized.to_string());
        }
    };

    for text in texts {
        if text.is_empty() {
            continue;
        }
        for pattern in &patterns {
            for caps in pattern.captures_iter(text) {
                push(&mut candidates, &caps[1]);
            }
        }
        // Many news headlines use "City: ..." format.
        if let Some((leading, _)) = text.split_once(':') {
            let leading = leading.trim();
            if is_title_case(leading) {
                push(&mut candidates, leading);
            }
        }
    }
    candidates
}

/// Whether every whitespace/hyphen-separated word starts with an uppercase
/// letter and carries no further uppercase. Words not starting with a letter
/// pass through.
fn is_title_case(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .all(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
                Some(first) if first.is_alphabetic() => false,
                Some(_) => true,
                None => true,
            }
        })
}
