use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TOKENS, MODEL_NAME, SYSTEM_PROMPT, TEMPERATURE};

use super::Message;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(model: String, messages: Vec<Message>, max_tokens: u32, temperature: f32) -> Self {
        ChatRequest {
            model,
            messages,
            max_tokens,
            temperature,
        }
    }
}

/// Builds the request for a single prompt: the fixed system prompt followed
/// by the caller's text, forwarded verbatim. The message order is what the
/// server replays to the model, so it must stay system-then-user.
pub fn build_chat_request(user_prompt: &str) -> ChatRequest {
    let messages = vec![
        Message::new("system", SYSTEM_PROMPT),
        Message::new("user", user_prompt),
    ];
    ChatRequest::new(MODEL_NAME.to_string(), messages, MAX_TOKENS, TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PROMPT;

    #[test]
    fn test_build_system_then_user() {
        let chat_request = build_chat_request("What is the capital of France?");

        assert_eq!(chat_request.model, MODEL_NAME);
        assert_eq!(chat_request.max_tokens, MAX_TOKENS);
        assert_eq!(chat_request.temperature, TEMPERATURE);
        assert_eq!(chat_request.messages.len(), 2);
        assert_eq!(chat_request.messages[0].role, "system");
        assert_eq!(chat_request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(chat_request.messages[1].role, "user");
        assert_eq!(
            chat_request.messages[1].content,
            "What is the capital of France?"
        );
    }

    #[test]
    fn test_prompt_is_not_trimmed_or_validated() {
        let chat_request = build_chat_request("  spaced \n prompt  ");
        assert_eq!(chat_request.messages[1].content, "  spaced \n prompt  ");

        let empty = build_chat_request("");
        assert_eq!(empty.messages.len(), 2);
        assert_eq!(empty.messages[1].content, "");
    }

    #[test]
    fn test_default_prompt_builds_like_any_other() {
        let chat_request = build_chat_request(DEFAULT_PROMPT);
        assert_eq!(chat_request.messages[1].content, DEFAULT_PROMPT);
    }

    #[test]
    fn test_serialized_shape() {
        let chat_request = build_chat_request("hello");
        let value = serde_json::to_value(&chat_request).unwrap();

        assert_eq!(value["model"], MODEL_NAME);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert_eq!(value["max_tokens"], 256);
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_identical_prompts_serialize_identically() {
        let first = serde_json::to_string(&build_chat_request("same prompt")).unwrap();
        let second = serde_json::to_string(&build_chat_request("same prompt")).unwrap();
        assert_eq!(first, second);
    }
}
