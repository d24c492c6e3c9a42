//! Pickpocket news feed collection.
//!
//! Builds the combined search query, fetches the RSS search endpoint over
//! HTTP with a bounded timeout, and parses the returned XML into normalized
//! [`pickwatch_core::Report`]s with heuristic location guesses.

pub mod client;
pub mod error;
pub mod locations;
pub mod parse;
pub mod query;

mod dates;

pub use client::FeedClient;
pub use error::FeedError;
pub use parse::parse_feed_items;
pub use query::{combine_query, BASE_QUERY};
