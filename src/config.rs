//! Planner configuration.
//!
//! Load planner limits from TOML to tune the allocator without code changes.
//!
//! # Examples
//!
//! ```
//! use u_gradplan::config::PlannerConfig;
//! use u_gradplan::dispatching::TieBreaker;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     max_credits_per_term = 18
//!     tie_breaker = "by_code"
//! "#).unwrap();
//!
//! assert_eq!(config.max_credits_per_term, 18);
//! assert_eq!(config.max_passes, 50);
//! assert_eq!(config.tie_breaker, TieBreaker::ByCode);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use u_gradplan::config::PlannerConfig;
//!
//! let config = PlannerConfig::load("planner.toml").unwrap_or_default();
//! assert_eq!(config.max_credits_per_term, 21);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dispatching::TieBreaker;
use crate::scheduler::ScanOrder;

/// Default per-term credit cap.
pub const MAX_CREDITS_PER_TERM: u32 = 21;

/// Default bound on allocator passes.
pub const MAX_PASSES: usize = 50;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Limits and tie-breaking used by a planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Hard cap on credits in one term.
    pub max_credits_per_term: u32,
    /// Maximum allocator passes before giving up on remaining courses.
    pub max_passes: usize,
    /// Ordering among candidates tied on every priority rule.
    pub tie_breaker: TieBreaker,
    /// Direction in which each allocator pass visits the ranked list.
    pub scan_order: ScanOrder,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_credits_per_term: MAX_CREDITS_PER_TERM,
            max_passes: MAX_PASSES,
            tie_breaker: TieBreaker::Stable,
            scan_order: ScanOrder::Reverse,
        }
    }
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// holds invalid limits.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the per-term credit cap.
    pub fn with_max_credits_per_term(mut self, credits: u32) -> Self {
        self.max_credits_per_term = credits;
        self
    }

    /// Sets the pass limit.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Sets the final tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets the allocator scan direction.
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Rejects limits under which no plan can make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_credits_per_term == 0 {
            return Err(ConfigError::Invalid(
                "max_credits_per_term must be positive".into(),
            ));
        }
        if self.max_passes == 0 {
            return Err(ConfigError::Invalid("max_passes must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_credits_per_term, 21);
        assert_eq!(config.max_passes, 50);
        assert_eq!(config.tie_breaker, TieBreaker::Stable);
        assert_eq!(config.scan_order, ScanOrder::Reverse);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            max_credits_per_term = 15
            max_passes = 80
            tie_breaker = "by_code"
            scan_order = "rank_order"
        "#;
        let config = PlannerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.scan_order, ScanOrder::RankOrder);
        assert_eq!(config.max_credits_per_term, 15);
        assert_eq!(config.max_passes, 80);
        assert_eq!(config.tie_breaker, TieBreaker::ByCode);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = PlannerConfig::from_toml_str("max_credits_per_term = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = PlannerConfig::from_toml_str("max_passes = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = PlannerConfig::from_toml_str("max_passes = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PlannerConfig::load("/definitely/not/here/planner.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = PlannerConfig::new()
            .with_max_credits_per_term(18)
            .with_max_passes(10)
            .with_tie_breaker(TieBreaker::ByCode);
        assert_eq!(config.max_credits_per_term, 18);
        assert_eq!(config.max_passes, 10);
        assert_eq!(config.tie_breaker, TieBreaker::ByCode);
    }
}
