//! Search expression construction for the pickpocket feed.

/// Fixed disjunction of pickpocket-related phrases sent on every run.
pub const BASE_QUERY: &str = r#""pickpocket" OR "pick pocket" OR "bag snatching""#;

/// Combine the base pickpocket query with an optional user-supplied filter.
///
/// A missing or all-whitespace filter yields [`BASE_QUERY`] unchanged;
/// otherwise the result is `(<BASE>) AND (<filter>)` with the filter trimmed.
#[must_use]
pub fn combine_query(user_filter: Option<&str>) -> String {
    match user_filter.map(str::trim) {
        Some(filter) if !filter.is_empty() => format!("({BASE_QUERY}) AND ({filter})"),
        _ => BASE_QUERY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_returns_base_query_unchanged() {
        assert_eq!(combine_query(None), BASE_QUERY);
    }

    #[test]
    fn whitespace_only_filter_is_treated_as_absent() {
        assert_eq!(combine_query(Some("   ")), BASE_QUERY);
        assert_eq!(combine_query(Some("\t\n")), BASE_QUERY);
        assert_eq!(combine_query(Some("")), BASE_QUERY);
    }

    #[test]
    fn filter_is_anded_with_the_base_query() {
        assert_eq!(
            combine_query(Some("Paris")),
            format!("({BASE_QUERY}) AND (Paris)")
        );
    }

    #[test]
    fn filter_is_trimmed_before_combining() {
        assert_eq!(
            combine_query(Some("  metro station  ")),
            format!("({BASE_QUERY}) AND (metro station)")
        );
    }
}
