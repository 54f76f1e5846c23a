use portfolio_common::error::CommonError;
use portfolio_common::openai::OpenAiClientError;
use portfolio_core::EditError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("please upload a PDF file (got {0})")]
    InvalidResume(String),

    #[error("description generation failed: {0}")]
    Generation(#[from] OpenAiClientError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
