// src/config/consts.rs

// Extraction API
pub const DEFAULT_BASE_URL: &str = "https://api.scrapegraphai.com";
pub const SMARTSCRAPER_PATH: &str = "/v1/smartscraper";
pub const API_KEY_HEADER: &str = "SGAI-APIKEY";
pub const USER_AGENT: &str = concat!("gh_insights/", env!("CARGO_PKG_VERSION"));

// Env
pub const ENV_API_KEY: &str = "SGAI_API_KEY";
pub const ENV_BASE_URL: &str = "SGAI_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "SGAI_TIMEOUT_SECS";
pub const ENV_OUT_DIR: &str = "GH_INSIGHTS_OUT_DIR";

// Timeouts. Extraction runs an LLM over a live page; it is slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const POLL_INTERVAL_MS: u64 = 3_000;
pub const MAX_POLLS: u32 = 40;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Placeholder for missing values
pub const SENTINEL: &str = "N/A";
