use std::env;

/// Default Groq API URL
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model name
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.6;

/// Default maximum output tokens per reply
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// How many non-system turns are kept per request. Keeps request size
/// bounded so long sessions do not run into provider limits.
pub const DEFAULT_HISTORY_WINDOW: usize = 20;

/// Environment variable holding the Groq API key
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Configuration for the completion client. Built once and injected at
/// construction; the client never reads the environment on its own.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key for authentication. None means "not configured" and makes
    /// every call short-circuit before any network activity.
    pub api_key: Option<String>,
    /// Chat completions endpoint URL
    pub api_url: String,
    /// Model name sent with every request
    pub model: String,
    /// Sampling temperature sent with every request
    pub temperature: f64,
    /// Maximum output tokens per reply
    pub max_tokens: u32,
    /// Number of recent non-system turns kept per request
    pub history_window: usize,
}

impl ClientConfig {
    /// Build a config from the process environment (GROQ_API_KEY)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: GROQ_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}
