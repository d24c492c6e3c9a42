use std::net::SocketAddr;
use std::path::PathBuf;

/// Process-wide configuration, loaded once at startup from `PICKWATCH_*`
/// environment variables and passed explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory holding the date-partitioned JSONL collection logs.
    pub data_dir: PathBuf,
    /// RSS search endpoint queried for pickpocket headlines.
    pub feed_endpoint: String,
    pub feed_timeout_secs: u64,
    pub user_agent: String,
}
