use serde::Deserialize;

use crate::errors::ApiError;

use super::{Choice, Usage};

// Only `choices` is required; everything else the server sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub usage: Option<Usage>,
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Content of the first completion choice.
    pub fn first_content(&self) -> Result<&str, ApiError> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
                ApiError::Parse("no message content in first completion choice".to_string())
            })
    }
}
