//! Story title lookup
//!
//! Titles come from an HTTP endpoint that answers `GET <endpoint><story id>`
//! with a small HTML fragment. A failed lookup never aborts the caller:
//! [`TitleLookup::title`] logs the failure and yields an empty string.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::TitleConfig;
use crate::error::{RatError, Result};

static MARKUP: OnceLock<Regex> = OnceLock::new();

fn get_markup_pattern() -> Result<&'static Regex> {
    if let Some(re) = MARKUP.get() {
        return Ok(re);
    }
    let re = Regex::new(r"<[^>]*>")
        .map_err(|e| RatError::Other(format!("failed to compile markup pattern: {}", e)))?;
    Ok(MARKUP.get_or_init(|| re))
}

/// Strip markup from a response body and collapse whitespace.
pub fn extract_title(body: &str) -> Result<String> {
    let text = get_markup_pattern()?.replace_all(body, " ");
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Source of human-readable story titles.
pub trait TitleLookup {
    /// Fetch the title for `story_id`, surfacing any failure.
    fn fetch(&self, story_id: &str) -> Result<String>;

    /// Title for `story_id`, or an empty string if it could not be fetched.
    fn title(&self, story_id: &str) -> String {
        match self.fetch(story_id) {
            Ok(title) => title,
            Err(e) => {
                warn!(story = story_id, error = %e, "title lookup failed");
                String::new()
            }
        }
    }
}

/// Looks titles up over HTTP with a global request timeout.
pub struct HttpTitleLookup {
    agent: ureq::Agent,
    endpoint: String,
    user_agent: String,
}

impl HttpTitleLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        let user_agent = format!(
            "ratgraph/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        Self {
            agent,
            endpoint: endpoint.into(),
            user_agent,
        }
    }

    pub fn from_config(config: &TitleConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn url_for(&self, story_id: &str) -> String {
        format!("{}{}", self.endpoint, story_id)
    }
}

impl TitleLookup for HttpTitleLookup {
    fn fetch(&self, story_id: &str) -> Result<String> {
        let url = self.url_for(story_id);
        debug!(url = %url, "fetching story title");

        let mut response = match self
            .agent
            .get(&url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(RatError::network(&url, format!("HTTP {}", code)))
            }
            Err(e) => return Err(RatError::network(&url, e)),
        };

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RatError::network(&url, e))?;
        extract_title(&body)
    }
}

/// Lookup used when titles are disabled; every title is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTitles;

impl TitleLookup for NoTitles {
    fn fetch(&self, _story_id: &str) -> Result<String> {
        Ok(String::new())
    }
}

/// Memoizes another lookup so each story is fetched at most once.
///
/// Failed fetches are cached as empty titles.
pub struct CachedTitles<L> {
    inner: L,
    cache: RefCell<HashMap<String, String>>,
}

impl<L: TitleLookup> CachedTitles<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<L: TitleLookup> TitleLookup for CachedTitles<L> {
    fn fetch(&self, story_id: &str) -> Result<String> {
        Ok(self.title(story_id))
    }

    fn title(&self, story_id: &str) -> String {
        if let Some(title) = self.cache.borrow().get(story_id) {
            return title.clone();
        }
        let title = self.inner.title(story_id);
        self.cache
            .borrow_mut()
            .insert(story_id.to_string(), title.clone());
        title
    }
}

/// Build the lookup a run should use.
pub fn lookup_for(config: &TitleConfig) -> Box<dyn TitleLookup> {
    if config.enabled {
        Box::new(CachedTitles::new(HttpTitleLookup::from_config(config)))
    } else {
        Box::new(NoTitles)
    }
}
