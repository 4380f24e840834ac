//! Engine configuration, read from TOML at startup.
//!
//! ```toml
//! match_threshold = 0.8
//!
//! [ranking]
//! patterns = [{ name = "media-audiobookstore", pattern = "(?i)//media[.]audiobookstore[.]com/" }]
//! rewrites = [{ pattern = "-square-[0-9]+[.]", replacement = "-square-1536." }]
//! ```
//!
//! Every key is optional.

use crate::error::{ReconcileError, ReconcileResult};
use bookmerge_rank::{RankConfig, SourceRanker};
use bookmerge_text::{DEFAULT_MATCH_THRESHOLD, IdentityMatcher};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Token-overlap threshold for fuzzy identity matching, in `(0, 1]`.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default)]
    pub ranking: RankConfig,
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            ranking: RankConfig::default(),
        }
    }
}

impl ReconcileConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(contents: &str) -> ReconcileResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file is missing, unreadable, or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to load config {:?}: {}. Falling back to defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Checks the threshold range and that every pattern compiles.
    pub fn validate(&self) -> ReconcileResult<()> {
        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(ReconcileError::ConfigValidation(format!(
                "match_threshold must be in (0, 1], got {}",
                self.match_threshold
            )));
        }
        self.ranker()?;
        Ok(())
    }

    pub fn matcher(&self) -> IdentityMatcher {
        IdentityMatcher::new(self.match_threshold)
    }

    pub fn ranker(&self) -> ReconcileResult<SourceRanker> {
        Ok(SourceRanker::new(&self.ranking)?)
    }
}
