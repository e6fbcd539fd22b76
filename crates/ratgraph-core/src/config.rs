//! Analytics configuration for ratgraph
//!
//! Read from a TOML file, then overlaid with `RATGRAPH_TITLE_ENDPOINT` and
//! `RATGRAPH_TITLE_TIMEOUT`. Every field has a default, so an empty file is
//! a valid config.

pub mod types;

use std::fs;
use std::path::Path;

pub use types::{
    AnalyticsConfig, CentralityConfig, LeaderboardConfig, TitleConfig, DEFAULT_TITLE_ENDPOINT,
    DEFAULT_TITLE_TIMEOUT_SECONDS,
};

use crate::bail_invalid;
use crate::error::{RatError, Result};
use types::{MAX_TITLE_TIMEOUT_SECONDS, MIN_TITLE_TIMEOUT_SECONDS};

/// File looked for in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "ratgraph.toml";

const TITLE_ENDPOINT_ENV_VAR: &str = "RATGRAPH_TITLE_ENDPOINT";
const TITLE_TIMEOUT_ENV_VAR: &str = "RATGRAPH_TITLE_TIMEOUT";

impl AnalyticsConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| RatError::io_operation("read", path.display(), e))?;
        Self::parse(&content)
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: AnalyticsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for a run: an explicit path must exist, otherwise
    /// `ratgraph.toml` in `dir` is used if present, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RatError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content).map_err(|e| RatError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    /// Overlay environment variables
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(TITLE_ENDPOINT_ENV_VAR) {
            if !url.is_empty() {
                self.titles.endpoint = url;
            }
        }

        if let Ok(timeout) = std::env::var(TITLE_TIMEOUT_ENV_VAR) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.titles.timeout_seconds =
                    seconds.clamp(MIN_TITLE_TIMEOUT_SECONDS, MAX_TITLE_TIMEOUT_SECONDS);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let timeout_range = MIN_TITLE_TIMEOUT_SECONDS..=MAX_TITLE_TIMEOUT_SECONDS;
        if !timeout_range.contains(&self.titles.timeout_seconds) {
            bail_invalid!("titles.timeout_seconds", self.titles.timeout_seconds);
        }
        if self.titles.enabled && self.titles.endpoint.trim().is_empty() {
            bail_invalid!("titles.endpoint", "empty endpoint with titles enabled");
        }
        if self.leaderboard.user_top == 0 {
            bail_invalid!("leaderboard.user_top", self.leaderboard.user_top);
        }
        if self.leaderboard.story_top == 0 {
            bail_invalid!("leaderboard.story_top", self.leaderboard.story_top);
        }
        Ok(())
    }
}
