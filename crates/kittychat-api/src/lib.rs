//! Completion client for kittychat
//!
//! This crate turns an ordered conversation into a bounded chat-completions
//! request, performs one HTTP POST against the Groq endpoint, and classifies
//! the outcome into a single display string for the chat panel.

pub mod config;
pub mod error;
pub mod groq_client;

pub use config::{
    ClientConfig, DEFAULT_HISTORY_WINDOW, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    GROQ_API_URL,
};
pub use error::CompletionError;
pub use groq_client::{
    GroqClient, CONNECTION_REPLY, MISSING_KEY_REPLY, RATE_LIMIT_REPLY, TECHNICAL_ERROR_PREFIX,
};
