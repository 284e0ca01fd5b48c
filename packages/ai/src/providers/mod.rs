//! LLM provider abstraction and implementations.
//!
//! The briefing generator talks to a single text-generation provider
//! through the [`LlmProvider`] trait; the `OpenAI` chat-completions
//! implementation is the only one configured.

pub mod openai;

use crate::AiError;

/// Default model used when `AI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Trait for LLM providers.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends one completion request with a fixed system role and a user
    /// prompt, returning the completion text.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AiError>;
}

/// Creates the LLM provider from environment variables.
///
/// Requires `OPENAI_API_KEY`; `AI_MODEL` optionally overrides the
/// default model.
///
/// # Errors
///
/// Returns [`AiError::MissingCredential`] if `OPENAI_API_KEY` is not
/// set. Callers treat this as fatal at startup, before any UI is shown.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, AiError> {
    let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| AiError::MissingCredential {
        name: "OPENAI_API_KEY",
    })?;
    let model = std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    log::info!("Using OpenAI text-generation provider with model {model}");
    Ok(Box::new(openai::OpenAiProvider::new(api_key, model)))
}
