//! Input validation for configuration and host-supplied schema data.

use crate::config::SeoConfig;
use crate::error::ValidateError;
use url::Url;

/// Reject configurations that cannot produce meaningful tags.
pub fn config(config: &SeoConfig) -> Result<(), ValidateError> {
    if config.site.name.trim().is_empty() {
        return Err(ValidateError::MissingSiteName);
    }
    if config.multilingual.enabled
        && !config.multilingual.locales.is_empty()
        && !config
            .multilingual
            .locales
            .contains(&config.multilingual.default_locale)
    {
        return Err(ValidateError::MissingDefaultLocale(
            config.multilingual.default_locale.clone(),
        ));
    }
    Ok(())
}

/// Absolute or site-relative URL.
pub fn url(value: &str) -> Result<(), ValidateError> {
    if value.trim().is_empty() {
        return Err(ValidateError::EmptyUrl);
    }
    if value.starts_with('/') {
        return Ok(());
    }
    match Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        _ => Err(ValidateError::InvalidUrl(value.to_string())),
    }
}

/// Rating value within its declared scale.
pub fn rating(value: f64, worst: f64, best: f64) -> Result<(), ValidateError> {
    if value < worst || value > best {
        return Err(ValidateError::RatingOutOfRange { value, worst, best });
    }
    Ok(())
}
