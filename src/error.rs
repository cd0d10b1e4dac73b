//! Error handling for the skillgraph application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("Text extraction error: {0}")]
    TextExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillGraphError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillGraphError {
    fn from(err: anyhow::Error) -> Self {
        SkillGraphError::AnalysisFailed(err.to_string())
    }
}
