//! Error types for the lunch agent.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Kakao Local API error: {0}")]
    Kakao(#[from] KakaoError),

    #[error("Tool error: {0}")]
    Tool(#[from] crate::tools::tool::ToolError),
}

/// Configuration-related errors. Fatal at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the Kakao Local API transport and decoding layer.
///
/// An empty result set is never one of these; they cover the cases where
/// the upstream could not be reached, rejected the request, or returned a
/// body we cannot decode.
#[derive(Debug, thiserror::Error)]
pub enum KakaoError {
    /// The request never produced a usable response (DNS, TLS, connect,
    /// body read). No retry is attempted.
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status code.
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The response body did not match the documented shape.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}
