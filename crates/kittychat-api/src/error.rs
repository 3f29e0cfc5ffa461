use thiserror::Error;

/// Outcome taxonomy for a single completion call. Every variant is
/// rendered to a plain display string at the `GroqClient::reply` boundary;
/// none of them ever reaches the UI layer as an error value.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key configured. Detected before any network activity.
    #[error("falta configurar la API Key")]
    MissingApiKey,

    /// Provider answered HTTP 429. Recoverable by waiting.
    #[error("el proveedor está limitando las peticiones")]
    RateLimited,

    /// Provider answered with any other non-2xx status
    #[error("Error {status}: {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body carried no usable choice
    #[error("la respuesta no trajo ningún mensaje")]
    EmptyResponse,

    /// 2xx response whose body was not valid JSON
    #[error("no se pudo interpretar la respuesta del servidor")]
    MalformedResponse(#[from] serde_json::Error),

    /// Transport-level failure: the request never completed meaningfully
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}
