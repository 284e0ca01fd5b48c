#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! AI patrol briefing generation.
//!
//! Builds the fixed patrol-briefing prompt from a selected location's
//! fields and requests one completion per selection from an LLM provider
//! behind the [`providers::LlmProvider`] trait. The `OpenAI`
//! chat-completions implementation uses deterministic sampling
//! (`temperature = 0`) and a 500-token output cap. There is no caching
//! and no retry: a provider failure propagates to the caller, which
//! degrades the briefing panel only.

pub mod briefing;
pub mod providers;

use thiserror::Error;

/// Errors that can occur during AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// The provider credential is missing from the environment.
    ///
    /// This is a fatal startup condition: the application refuses to
    /// serve without a configured text-generation provider.
    #[error("{name} environment variable not set")]
    MissingCredential {
        /// Name of the missing environment variable.
        name: &'static str,
    },
}
