use reqwest::StatusCode;

/// Failures raised while talking to the chat completions endpoint. Nothing
/// here is recovered internally; every variant propagates to the reporter
/// in `main`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to chat endpoint failed: {0}")]
    Connection(#[from] reqwest::Error),
    #[error("chat endpoint returned HTTP {status}")]
    HttpStatus { status: StatusCode, body: String },
    #[error("invalid chat response: {0}")]
    Parse(String),
}
