use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] ureq::Error),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("server error: {0}")]
    Server(String),

    #[error("download failed for {path}: {reason}")]
    DownloadFailed { path: PathBuf, reason: String },

    #[error("server not ready after {attempts} attempts: {last_error}")]
    ReadinessTimeout { attempts: u32, last_error: String },
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
