/// Resume reference shown behind the hero's download button.
///
/// Key schema:
/// - `portfolio:v1:resume` — JSON ResumeRef of the last upload (no TTL)
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use portfolio_common::redis::RedisCache;
use portfolio_core::{EditError, SessionContext};

use crate::error::AppError;

const RESUME_KEY: &str = "portfolio:v1:resume";
const PDF: &str = "application/pdf";
const DEFAULT_FILE_NAME: &str = "resume.pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeRef {
    pub file_name: String,
    /// Where the file can be downloaded from.
    pub location: String,
    /// `true` when this came from an upload rather than the default.
    pub uploaded: bool,
}

pub struct ResumeStore {
    redis: RedisCache,
    default_location: String,
}

impl ResumeStore {
    pub fn new(redis: RedisCache, default_location: String) -> Self {
        Self {
            redis,
            default_location,
        }
    }

    pub async fn current(&self) -> ResumeRef {
        match self.redis.get_json::<ResumeRef>(RESUME_KEY).await {
            Some(stored) => stored,
            None => ResumeRef {
                file_name: DEFAULT_FILE_NAME.to_string(),
                location: self.default_location.clone(),
                uploaded: false,
            },
        }
    }

    /// Records a new resume. Only PDFs are accepted, and only in authoring
    /// mode.
    pub async fn upload(
        &self,
        context: &SessionContext,
        file_name: &str,
        content_type: &str,
        location: &str,
    ) -> Result<ResumeRef, AppError> {
        if !context.is_authoring() {
            return Err(EditError::ReadOnly { section: "resume" }.into());
        }
        if !content_type.trim().eq_ignore_ascii_case(PDF) {
            return Err(AppError::InvalidResume(content_type.to_string()));
        }
        if location.trim().is_empty() {
            return Err(AppError::InvalidRequest("location must not be empty".to_string()));
        }

        let resume = ResumeRef {
            file_name: file_name.trim().to_string(),
            location: location.trim().to_string(),
            uploaded: true,
        };
        self.redis.put_json(RESUME_KEY, &resume, "resume").await?;
        info!(file_name = %resume.file_name, "resume uploaded");
        Ok(resume)
    }
}
