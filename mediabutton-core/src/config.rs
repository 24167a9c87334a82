use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::{error::SessionError, gesture::DEFAULT_CLICK_TIMEOUT, media_id::DEFAULT_EPISODE_PREFIXES};

/// Media session settings, loadable from TOML:
///
/// ```toml
/// click_timeout_ms = 800
/// episode_prefixes = ["ep_", "local_ep_"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Length of the media-button gesture window
    pub click_timeout_ms: u64,
    /// Media-id prefixes that mark podcast episodes
    pub episode_prefixes: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            click_timeout_ms: DEFAULT_CLICK_TIMEOUT.as_millis() as u64,
            episode_prefixes: DEFAULT_EPISODE_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_click_timeout_ms(mut self, click_timeout_ms: u64) -> Self {
        self.click_timeout_ms = click_timeout_ms;
        self
    }

    pub fn with_episode_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.episode_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn click_timeout(&self) -> Duration {
        Duration::from_millis(self.click_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.click_timeout_ms == 0 {
            return Err(SessionError::ZeroClickTimeout);
        }
        if self.episode_prefixes.iter().any(|prefix| prefix.is_empty()) {
            return Err(SessionError::EmptyEpisodePrefix);
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SessionError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded session config from {:?}", path);
        Ok(config)
    }
}
