/// Errors produced by jsxmap during repository processing.
#[derive(Debug, thiserror::Error)]
pub enum JsxmapError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("parse failed: {0}")]
    ParseFailed(String),

    #[error("clone failed for {url}: {reason}")]
    CloneFailed { url: String, reason: String },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
