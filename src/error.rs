//! Error types for collaborator seams and input validation.

use thiserror::Error;

/// Failure from an injected URL collaborator.
///
/// These never abort tag assembly: callers downgrade to a base-URL join or
/// skip the affected fragment.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The resolver has no route registered under this name.
    #[error("no route named '{0}'")]
    UnknownRoute(String),

    /// A route exists but the URL could not be generated.
    #[error("route '{name}' failed: {reason}")]
    Route { name: String, reason: String },

    /// A sized image URL could not be generated.
    #[error("image url for '{path}' failed: {reason}")]
    ImageUrl { path: String, reason: String },
}

/// Invalid configuration or schema input.
#[derive(Debug, Error, PartialEq)]
pub enum ValidateError {
    #[error("site.name is required")]
    MissingSiteName,

    #[error("invalid url: '{0}'")]
    InvalidUrl(String),

    #[error("empty url")]
    EmptyUrl,

    #[error("rating {value} must be between {worst} and {best}")]
    RatingOutOfRange { value: f64, worst: f64, best: f64 },

    #[error("multilingual.locales must contain default_locale '{0}'")]
    MissingDefaultLocale(String),
}
