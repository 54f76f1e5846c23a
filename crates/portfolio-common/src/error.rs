/// Infrastructure errors shared by the portfolio crates.
///
/// The server's own error type wraps these via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("redis unavailable, {0} was not stored")]
    RedisUnavailable(&'static str),

    #[error("encoding {0} failed: {1}")]
    Encode(&'static str, serde_json::Error),
}
