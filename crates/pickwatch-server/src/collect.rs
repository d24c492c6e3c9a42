//! The `collect_pickpocket_reports` tool: validate → fetch → parse → persist.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use pickwatch_core::{AppConfig, CollectionEntry};
use pickwatch_feed::{combine_query, parse_feed_items, FeedClient, FeedError};
use pickwatch_store::DailyLog;

use crate::registry::{Tool, ToolError};

pub const TOOL_NAME: &str = "collect_pickpocket_reports";

const DEFAULT_MAX_RESULTS: i64 = 15;
const MAX_RESULTS_LIMIT: usize = 25;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectArgs {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: i64,
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

/// Result of one collection run. Passed around as a typed value and
/// serialized to the untagged JSON shapes only at the HTTP boundary.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CollectOutcome {
    Success {
        entry: CollectionEntry,
        file_path: String,
        message: String,
    },
    Validation {
        error: String,
        details: ValidationDetails,
    },
    Feed {
        error: String,
        details: String,
        source: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ValidationDetails {
    pub max_results: i64,
}

pub struct CollectTool {
    feed: FeedClient,
    log: DailyLog,
}

impl CollectTool {
    /// Build the tool from process configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] if the feed HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, FeedError> {
        let feed = FeedClient::new(
            config.feed_endpoint.clone(),
            config.feed_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self {
            feed,
            log: DailyLog::new(config.data_dir.clone()),
        })
    }

    /// Run one collection: validate the limit, fetch and parse the feed,
    /// persist exactly one entry on success (including the zero-report case).
    ///
    /// Validation and fetch/parse failures are structured outcomes with no
    /// persistence side effect. A persist failure is NOT a structured
    /// outcome: the entry could not be durably recorded, so it propagates
    /// as [`ToolError::Persist`].
    async fn collect(&self, args: CollectArgs) -> Result<CollectOutcome, ToolError> {
        tracing::info!(
            query = ?args.query,
            max_results = args.max_results,
            "received collect_pickpocket_reports request"
        );

        let limit = usize::try_from(args.max_results).unwrap_or(0);
        if !(1..=MAX_RESULTS_LIMIT).contains(&limit) {
            tracing::warn!(
                max_results = args.max_results,
                limit = MAX_RESULTS_LIMIT,
                "rejecting request due to out-of-range max_results"
            );
            return Ok(CollectOutcome::Validation {
                error: format!("`max_results` must be between 1 and {MAX_RESULTS_LIMIT}."),
                details: ValidationDetails {
                    max_results: args.max_results,
                },
            });
        }

        let timestamp = Utc::now();
        let query = combine_query(args.query.as_deref());
        let feed_url = self.feed.feed_url(&query);
        tracing::info!(url = %feed_url, "fetching pickpocket feed");

        let body = match self.feed.fetch(&feed_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch feed");
                return Ok(CollectOutcome::Feed {
                    error: "Failed to fetch pickpocket reports feed.".to_string(),
                    details: e.to_string(),
                    source: feed_url,
                });
            }
        };

        let reports = match parse_feed_items(&body, limit) {
            Ok(reports) => reports,
            Err(e) => {
                tracing::error!(error = %e, "failed to process feed");
                return Ok(CollectOutcome::Feed {
                    error: "Failed to process pickpocket reports feed.".to_string(),
                    details: e.to_string(),
                    source: feed_url,
                });
            }
        };

        let entry = CollectionEntry::new(timestamp, query, args.query, feed_url, reports);
        let path = self.log.append(&entry)?;
        tracing::info!(
            count = entry.report_count,
            path = %path.display(),
            query = %entry.query,
            "persisted collection entry"
        );

        let message = if entry.reports.is_empty() {
            "Snapshot persisted but no reports were found for the query."
        } else {
            "Snapshot persisted to daily log."
        };

        Ok(CollectOutcome::Success {
            entry,
            file_path: path.display().to_string(),
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl Tool for CollectTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Search recent news for pickpocket incidents and persist the results."
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: CollectArgs = serde_json::from_value(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        let outcome = self.collect(args).await?;
        serde_json::to_value(outcome).map_err(|e| ToolError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_max_results_to_fifteen() {
        let args: CollectArgs = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(args.max_results, 15);
        assert!(args.query.is_none());
    }

    #[test]
    fn unknown_argument_fields_are_rejected() {
        let result: Result<CollectArgs, _> =
            serde_json::from_value(serde_json::json!({"limit": 5}));
        assert!(result.is_err());
    }

    #[test]
    fn validation_outcome_serializes_to_error_and_details() {
        let outcome = CollectOutcome::Validation {
            error: "`max_results` must be between 1 and 25.".to_string(),
            details: ValidationDetails { max_results: 30 },
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["details"]["max_results"], 30);
        assert!(json["error"].as_str().unwrap().contains("max_results"));
        assert!(json.get("entry").is_none());
    }

    #[test]
    fn feed_outcome_carries_the_feed_url_as_source() {
        let outcome = CollectOutcome::Feed {
            error: "Failed to fetch pickpocket reports feed.".to_string(),
            details: "timeout".to_string(),
            source: "https://example.com/rss?q=x".to_string(),
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["source"], "https://example.com/rss?q=x");
    }
}
