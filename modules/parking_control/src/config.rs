//! Configuration for parking control module

use serde::{Deserialize, Serialize};

/// Parking control configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size used when a listing request does not give one
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Upper bound for requested page sizes; larger values are clamped
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,

    /// CORS preflight cache lifetime (seconds)
    #[serde(default = "default_cors_max_age_secs")]
    pub cors_max_age_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            cors_max_age_secs: default_cors_max_age_secs(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

fn default_cors_max_age_secs() -> u64 {
    3600
}
