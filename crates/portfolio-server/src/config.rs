use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_RESUME: &str = "/resume.pdf";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Server configuration, read from the environment once at start-up.
///
/// Everything is optional. Without Redis the authoring flag reads as off
/// (unless forced), the resume falls back to its default location and
/// generated descriptions are not cached.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL. `None` disables the object store.
    pub redis_url: Option<String>,
    /// JSON file replacing the bundled seed content.
    pub seed_path: Option<PathBuf>,
    /// Turns authoring mode on regardless of the stored flag.
    pub force_authoring: bool,
    /// Resume location served until one is uploaded.
    pub resume_default: String,
    /// Model used for project descriptions.
    pub description_model: String,
}

impl Config {
    /// Optional:
    /// - `REDIS_URL`
    /// - `PORTFOLIO_SEED_PATH`: must point at an existing file when set
    /// - `PORTFOLIO_AUTHORING`: `true`/`1`/`yes` to force authoring mode
    /// - `PORTFOLIO_RESUME_DEFAULT` (default: "/resume.pdf")
    /// - `PORTFOLIO_DESCRIPTION_MODEL` (default: "gpt-4o-mini")
    pub fn from_env() -> Result<Self, AppError> {
        let seed_path = std::env::var("PORTFOLIO_SEED_PATH").ok().map(PathBuf::from);
        if let Some(path) = &seed_path {
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "seed file not found: {}",
                    path.display()
                )));
            }
        }

        let force_authoring = match std::env::var("PORTFOLIO_AUTHORING") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("PORTFOLIO_AUTHORING must be a boolean, got {raw:?}"))
            })?,
            Err(_) => false,
        };

        Ok(Self {
            redis_url: std::env::var("REDIS_URL").ok().filter(|u| !u.is_empty()),
            seed_path,
            force_authoring,
            resume_default: std::env::var("PORTFOLIO_RESUME_DEFAULT")
                .unwrap_or_else(|_| DEFAULT_RESUME.to_string()),
            description_model: std::env::var("PORTFOLIO_DESCRIPTION_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
