//! Error types for truss analysis and optimization

use thiserror::Error;

/// Main error type for truss operations
#[derive(Error, Debug)]
pub enum TrussError {
    #[error("Node {0} not found in model")]
    NodeNotFound(usize),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Expected {expected} member areas, got {actual}")]
    AreaCountMismatch { expected: usize, actual: usize },

    #[error("Area {index} must be strictly positive, got {value}")]
    NonPositiveArea { index: usize, value: f64 },

    #[error("Singular stiffness matrix - structure may be disconnected or have insufficient supports")]
    SingularStiffness,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for truss operations
pub type TrussResult<T> = Result<T, TrussError>;
