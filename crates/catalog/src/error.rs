use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not valid JSON or has the wrong shape
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Entity without a usable id
    #[error("Entity at index {index} has an empty id")]
    EmptyId { index: usize },

    /// Two entities share an id
    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),

    /// Category name that is not part of the closed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Score outside 0..=100 (or NaN/inf)
    #[error("Entity '{id}' has performance_score {score} outside 0..=100")]
    ScoreOutOfRange { id: String, score: f64 },
}
