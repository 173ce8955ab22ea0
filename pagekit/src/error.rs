use pagedom::SelectorError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::utils::FormatError;

/// Errors surfaced by the interaction layer's public API.
///
/// Validation failures are not errors; they come back as
/// [`ValidationResult`](crate::validation::ValidationResult).
#[derive(Debug, Error)]
pub enum PagekitError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
