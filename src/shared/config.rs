use std::env;
use std::path::PathBuf;

use crate::shared::errors::{AppError, AppResult};

pub const CATALOG_PATH_VAR: &str = "SEARCH_HINTS_CATALOG_PATH";
pub const MAX_LIMIT_VAR: &str = "SEARCH_HINTS_MAX_LIMIT";
pub const FORWARD_LIMIT_VAR: &str = "SEARCH_HINTS_FORWARD_LIMIT";

/// Runtime configuration for the search hint service
///
/// The defaults leave ranking untouched: no page-size cap and the page limit
/// stays out of the catalog query, so the total count always reflects every
/// candidate the catalog returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHintsConfig {
    /// JSON catalog used by the command line front end
    pub catalog_path: Option<PathBuf>,

    /// Upper bound for a requested page size
    pub max_limit: Option<usize>,

    /// Pass the page limit to the catalog as a retrieval hint
    pub forward_limit_to_catalog: bool,
}

impl SearchHintsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = SearchHintsConfigBuilder::new();

        if let Some(path) = lookup(CATALOG_PATH_VAR).filter(|v| !v.trim().is_empty()) {
            builder = builder.catalog_path(PathBuf::from(path.trim()));
        }

        if let Some(raw) = lookup(MAX_LIMIT_VAR).filter(|v| !v.trim().is_empty()) {
            let max = raw.trim().parse::<usize>().map_err(|e| {
                AppError::ConfigurationError(format!("{} must be a number: {}", MAX_LIMIT_VAR, e))
            })?;
            builder = builder.max_limit(Some(max));
        }

        if let Some(raw) = lookup(FORWARD_LIMIT_VAR) {
            builder = builder.forward_limit_to_catalog(parse_flag(FORWARD_LIMIT_VAR, &raw)?);
        }

        builder.build().map_err(AppError::ConfigurationError)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_limit == Some(0) {
            return Err(format!("{} must be > 0", MAX_LIMIT_VAR));
        }

        Ok(())
    }
}

fn parse_flag(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::ConfigurationError(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

/// Builder for SearchHintsConfig to make test setup easier
#[derive(Default)]
pub struct SearchHintsConfigBuilder {
    config: SearchHintsConfig,
}

impl SearchHintsConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchHintsConfig::new(),
        }
    }

    pub fn catalog_path(mut self, path: PathBuf) -> Self {
        self.config.catalog_path = Some(path);
        self
    }

    pub fn max_limit(mut self, max: Option<usize>) -> Self {
        self.config.max_limit = max;
        self
    }

    pub fn forward_limit_to_catalog(mut self, forward: bool) -> Self {
        self.config.forward_limit_to_catalog = forward;
        self
    }

    pub fn build(self) -> Result<SearchHintsConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
