use clap::Parser;

use args::Args;
use clients::openai::chat_completions::get_completion_message;
use constants::{CHAT_COMPLETIONS_URL, DEFAULT_PROMPT};
use errors::ApiError;
use models::chat_request::build_chat_request;

mod args;
mod clients;
mod constants;
mod errors;
mod models;

async fn run(prompt: &str) -> Result<String, ApiError> {
    let chat_request = build_chat_request(prompt);
    let response = get_completion_message(CHAT_COMPLETIONS_URL, &chat_request).await?;
    let reply = response.first_content()?;
    Ok(reply.trim().to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "gemma_chat=warn".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let prompt = args.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    match run(&prompt).await {
        Ok(reply) => {
            println!("Assistant:");
            println!("{}", reply);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            // Surface server-side diagnostics (e.g. a JSON error object)
            // exactly as received.
            if let ApiError::HttpStatus { body, .. } = &err {
                if !body.is_empty() {
                    eprintln!("{}", body);
                }
            }
            std::process::exit(1);
        }
    }
}
