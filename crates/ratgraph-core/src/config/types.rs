//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::analytics::DistanceMetric;

/// Title lookup endpoint; the story id is appended to it.
pub const DEFAULT_TITLE_ENDPOINT: &str =
    "http://twittertrails.wellesley.edu/~trails/stories/title.php?id=";

/// Default timeout for a single title request
pub const DEFAULT_TITLE_TIMEOUT_SECONDS: u64 = 5;

/// Bounds applied to timeouts taken from the environment
pub const MIN_TITLE_TIMEOUT_SECONDS: u64 = 1;
pub const MAX_TITLE_TIMEOUT_SECONDS: u64 = 120;

/// Analytics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Story title lookups
    #[serde(default)]
    pub titles: TitleConfig,

    /// Default leaderboard depths
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,

    /// Centrality scan settings
    #[serde(default)]
    pub centrality: CentralityConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleConfig {
    /// Fetch titles over the network
    #[serde(default = "default_titles_enabled")]
    pub enabled: bool,

    #[serde(default = "default_title_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_title_timeout")]
    pub timeout_seconds: u64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            enabled: default_titles_enabled(),
            endpoint: default_title_endpoint(),
            timeout_seconds: default_title_timeout(),
        }
    }
}

fn default_titles_enabled() -> bool {
    true
}

fn default_title_endpoint() -> String {
    DEFAULT_TITLE_ENDPOINT.to_string()
}

fn default_title_timeout() -> u64 {
    DEFAULT_TITLE_TIMEOUT_SECONDS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeaderboardConfig {
    /// Ranks shown for the user leaderboard
    #[serde(default = "default_user_top")]
    pub user_top: usize,

    /// Ranks shown for the story leaderboard
    #[serde(default = "default_story_top")]
    pub story_top: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            user_top: default_user_top(),
            story_top: default_story_top(),
        }
    }
}

fn default_user_top() -> usize {
    5
}

fn default_story_top() -> usize {
    20
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CentralityConfig {
    #[serde(default)]
    pub distance: DistanceMetric,
}
