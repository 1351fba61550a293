//! Error types for targeting graph construction.

/// Errors that can occur while building a targeting graph from content.
#[derive(Debug, thiserror::Error)]
pub enum TargetingError {
    /// Parts whose chain of connections never reaches the center.
    ///
    /// Covers loops away from the center as well as connections to parts
    /// that are not in the part list.
    #[error("parts never connect to the center: {}", .0.join(", "))]
    Detached(Vec<String>),
}

/// Convenience result type for targeting operations.
pub type TargetingResult<T> = Result<T, TargetingError>;
