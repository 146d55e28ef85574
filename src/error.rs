use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("input batch contained no order rows")]
    EmptyBatch,

    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
