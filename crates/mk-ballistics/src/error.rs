//! Error types for attack resolution content and configuration.

use mk_targeting::TargetingError;

/// Errors raised while loading or validating ballistics content.
#[derive(Debug, thiserror::Error)]
pub enum BallisticsError {
    /// The accuracy thresholds are not usable.
    #[error("invalid accuracy ladder: {0}")]
    InvalidLadder(String),

    /// An attack configuration value is out of range.
    #[error("invalid attack config: {0}")]
    InvalidConfig(String),

    /// An anatomy lists no body parts.
    #[error("anatomy '{0}' has no parts")]
    EmptyAnatomy(String),

    /// An anatomy's center is not one of its parts.
    #[error("anatomy center '{0}' is not among its parts")]
    MissingCenter(String),

    /// A body part has a hit size that is zero, negative, or not finite.
    #[error("body part '{part}' has invalid hit size {size}")]
    InvalidHitSize {
        /// The offending part.
        part: String,
        /// The size it declared.
        size: f64,
    },

    /// The anatomy's connections do not form a tree around the center.
    #[error(transparent)]
    Targeting(#[from] TargetingError),

    /// Content could not be parsed.
    #[error("malformed content: {0}")]
    Content(#[from] serde_json::Error),
}

/// Convenience result type for ballistics operations.
pub type BallisticsResult<T> = Result<T, BallisticsError>;
