use reqwest::StatusCode;

use kittychat_logging::log_request_to_file;
use kittychat_models::{ChatRequest, ChatResponse, ErrorResponse, Message};

use crate::config::ClientConfig;
use crate::error::CompletionError;

/// Shown when no API key is configured. No network call is made.
pub const MISSING_KEY_REPLY: &str = "Error: Falta configurar la API Key.";

/// Shown on HTTP 429 instead of the provider's rate-limit text
pub const RATE_LIMIT_REPLY: &str =
    "¡Miau! Me escribiste muy rápido y necesito un respiro 😺 Esperá un momentito y volvé a intentar 💖";

/// Shown when the request never reaches the server
pub const CONNECTION_REPLY: &str =
    "Error de conexión: no pude hablar con el servidor. Revisá tu internet e intentá de nuevo.";

/// Prefix for every other failure surfaced to the chat panel
pub const TECHNICAL_ERROR_PREFIX: &str = "Error técnico: ";

/// Placeholder when the provider error body carries no message
const UNKNOWN_PROVIDER_ERROR: &str = "Desconocido";

/// Completion client for the Groq chat-completions endpoint.
///
/// Stateless between calls: each invocation trims the given history, makes
/// exactly one POST, and classifies the outcome. No retries, no timeout
/// beyond transport defaults, no shared mutable state.
pub struct GroqClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The boundary the UI calls: always a string to display as the
    /// assistant's turn, never an error value. (See `complete` for the
    /// typed path.)
    pub async fn reply(&self, history: &[Message]) -> String {
        match self.complete(history).await {
            Ok(text) => text,
            Err(CompletionError::MissingApiKey) => MISSING_KEY_REPLY.to_string(),
            Err(CompletionError::RateLimited) => RATE_LIMIT_REPLY.to_string(),
            Err(CompletionError::Network(_)) => CONNECTION_REPLY.to_string(),
            Err(err) => format!("{}{}", TECHNICAL_ERROR_PREFIX, err),
        }
    }

    /// One trim/send/classify cycle with the full error taxonomy
    pub async fn complete(&self, history: &[Message]) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(CompletionError::MissingApiKey)?;

        let request = self.build_request(history);

        // Best effort: a failed log write must not fail the call
        let _ = log_request_to_file(&self.config.api_url, &request, api_key);

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map(|detail| detail.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN_PROVIDER_ERROR.to_string());
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_text = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }

    /// Derive the bounded request body for the given history. Pure; never
    /// mutates the stored conversation.
    pub fn build_request(&self, history: &[Message]) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: bounded_messages(history, self.config.history_window),
        }
    }
}

/// Keep turn 0 (the system persona), then only the most recent `window`
/// of the remaining turns, in their original order. Older turns are
/// dropped silently, per request.
pub fn bounded_messages(history: &[Message], window: usize) -> Vec<Message> {
    let Some((system, rest)) = history.split_first() else {
        return Vec::new();
    };

    let start = rest.len().saturating_sub(window);
    let mut messages = Vec::with_capacity(1 + rest.len() - start);
    messages.push(system.clone());
    messages.extend_from_slice(&rest[start..]);
    messages
}
