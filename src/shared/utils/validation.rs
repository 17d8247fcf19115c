use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

static LANGUAGE_TAG: OnceLock<Regex> = OnceLock::new();

pub struct Validator;

impl Validator {
    /// Movie, series and person identifiers are non-negative 32-bit values
    pub fn validate_title_id(id: i64) -> Result<(), AppError> {
        if id < 0 {
            return Err(AppError::ValidationError(format!(
                "Identifier must not be negative (got {})",
                id
            )));
        }
        if id > i64::from(i32::MAX) {
            return Err(AppError::ValidationError(format!(
                "Identifier out of range (got {}, max {})",
                id,
                i32::MAX
            )));
        }
        Ok(())
    }

    /// TMDB accepts ratings from 0.5 to 10.0 in half-point steps
    pub fn validate_rating(value: f32) -> Result<(), AppError> {
        if !value.is_finite() || !(0.5..=10.0).contains(&value) {
            return Err(AppError::ValidationError(
                "Rating must be between 0.5 and 10.0".to_string(),
            ));
        }
        if (value * 2.0).fract() != 0.0 {
            return Err(AppError::ValidationError(
                "Rating must be a multiple of 0.5".to_string(),
            ));
        }
        Ok(())
    }

    /// Language tags in the `en` or `en-US` form
    pub fn validate_language_tag(tag: &str) -> Result<(), AppError> {
        let re = LANGUAGE_TAG.get_or_init(|| {
            Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("language tag pattern is valid")
        });
        if !re.is_match(tag) {
            return Err(AppError::ConfigError(format!(
                "Invalid language tag '{}', expected e.g. 'en' or 'en-US'",
                tag
            )));
        }
        Ok(())
    }

    pub fn validate_api_key(key: &str) -> Result<(), AppError> {
        if key.trim().is_empty() {
            return Err(AppError::ConfigError("API key cannot be empty".to_string()));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(AppError::ConfigError(
                "API key must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
