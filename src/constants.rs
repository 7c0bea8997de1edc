/// Chat completions route of the llama.cpp server started by
/// `launch_gemma_api.py`. The server only binds loopback.
pub const CHAT_COMPLETIONS_URL: &str = "http://127.0.0.1:54546/v1/chat/completions";

/// Model alias the server advertises for the Gemma 3 270M instruct weights.
pub const MODEL_NAME: &str = "gemma-3-270m-it";

/// System prompt sent ahead of every user prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Prompt used when the caller does not supply one.
pub const DEFAULT_PROMPT: &str = "Hello! Who are you?";

/// Completion length cap per request.
pub const MAX_TOKENS: u32 = 256;

/// Sampling temperature per request.
pub const TEMPERATURE: f32 = 0.7;

/// The model runs CPU-only, so a reply can take tens of seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;
