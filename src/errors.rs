use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Fit error: {0}")]
    FitError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Comparison error: {0}")]
    ComparisonError(String),

    #[error("Chart error: {0}")]
    ChartError(String),
}
