use std::time::Duration;

use reqwest::header;
use tracing::{debug, error};

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::errors::ApiError;
use crate::models::chat_request::ChatRequest;
use crate::models::chat_response::ChatResponse;

/// Posts a chat request to the given completions endpoint and returns the
/// parsed response. One attempt only; the caller decides what to do with
/// failures.
pub async fn get_completion_message(
    endpoint: &str,
    chat_request: &ChatRequest,
) -> Result<ChatResponse, ApiError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let body = serde_json::to_string(chat_request)
        .map_err(|e| ApiError::Parse(format!("failed to serialize chat request: {}", e)))?;

    debug!("Sending chat request to {}\nbody:\n{}", endpoint, body);

    let response = client
        .post(endpoint)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let response_text = response.text().await?;

    if !status.is_success() {
        error!(
            "Chat endpoint returned error status {}: {}",
            status, response_text
        );
        return Err(ApiError::HttpStatus {
            status,
            body: response_text,
        });
    }

    let chat_response = ChatResponse::from_json(&response_text).map_err(|e| {
        error!(
            "Error parsing response JSON: {}\nRaw response: {}",
            e, response_text
        );
        ApiError::Parse(e.to_string())
    })?;

    if let Some(usage) = &chat_response.usage {
        debug!(
            "Token usage: prompt {} completion {} total {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(chat_response)
}
