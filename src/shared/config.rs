use std::env;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// What `get_token` does when the remote fetch succeeded but caching the
/// token in the local store failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPersistence {
    /// Log the storage failure and still return the fetched token
    #[default]
    BestEffort,
    /// Return the storage error instead of the fetched token
    Strict,
}

impl FromStr for TokenPersistence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_effort" | "best-effort" | "ignore" => Ok(TokenPersistence::BestEffort),
            "strict" | "propagate" => Ok(TokenPersistence::Strict),
            other => Err(AppError::ConfigError(format!(
                "Unknown TOKEN_PERSISTENCE value '{}', expected 'best_effort' or 'strict'",
                other
            ))),
        }
    }
}

/// Runtime configuration, read from the environment (and `.env` if present)
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// TMDB v3 API key
    pub api_key: String,
    /// Base URL of the TMDB v3 API, without trailing slash
    pub base_url: String,
    /// Language sent with every catalog request
    pub language: String,
    /// Guest session used when submitting ratings
    pub guest_session_id: Option<String>,
    /// PostgreSQL URL for the local store; `None` keeps everything in memory
    pub database_url: Option<String>,
    pub token_persistence: TokenPersistence,
}

impl CatalogConfig {
    /// Configuration with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            guest_session_id: None,
            database_url: None,
            token_persistence: TokenPersistence::default(),
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("TMDB_API_KEY").ok_or_else(|| {
            AppError::ConfigError("TMDB_API_KEY environment variable not found".to_string())
        })?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = non_empty("TMDB_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(language) = non_empty("TMDB_LANGUAGE") {
            config.language = language;
        }
        config.guest_session_id = non_empty("TMDB_GUEST_SESSION_ID");
        config.database_url = non_empty("DATABASE_URL");
        if let Some(policy) = non_empty("TOKEN_PERSISTENCE") {
            config.token_persistence = policy.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_api_key(&self.api_key)?;
        Validator::validate_language_tag(&self.language)?;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "TMDB base URL must be an http(s) URL (got '{}')",
                self.base_url
            )));
        }
        Ok(())
    }
}
