use clap::{command, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"
Sends a single prompt to the Gemma chat endpoint served by llama.cpp on
127.0.0.1:54546 and prints the assistant's reply.

The prompt is paired with a fixed system prompt and posted to the server's
OpenAI-compatible /v1/chat/completions route. One request, one reply; there
is no conversation state between invocations.
"###
)]
pub struct Args {
    /// Prompt to send to the model. A fixed greeting is used when omitted.
    pub prompt: Option<String>,
}
