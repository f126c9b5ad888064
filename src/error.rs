//! Structured error types for gridview.
//!
//! Construction-time configuration validation is the only user-visible
//! failure mode; everything else in the engine degrades to a logged
//! fallback rather than erroring (see the session module).

/// All errors that can surface from the grid engine.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A configuration value that has no sane runtime default.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Duplicate column id in the column list; lookups by id would be ambiguous.
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),

    /// Snapshot serialization/deserialization error.
    #[error("snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
