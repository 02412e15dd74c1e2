//! Error types for the Patchwork SDK.

use serde::Deserialize;

/// Result type for SDK operations.
pub type PatchworkResult<T> = Result<T, PatchworkError>;

/// Error types that can occur when talking to the Patchwork API.
#[derive(Debug, thiserror::Error)]
pub enum PatchworkError {
    /// A parameter failed local validation before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The upstream API returned 404 for the requested resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// The upstream API returned 401, typically a bad or missing API key.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// The upstream API returned 403.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Any other non-2xx response, carrying the HTTP status and the
    /// upstream error payload.
    #[error("upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The request failed before a response was received (connect error,
    /// timeout, TLS failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL construction failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PatchworkError {
    /// Stable machine-readable label for this error, suitable for a caller
    /// that wants to branch on the failure class without parsing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Decode(_) | Self::InvalidUrl(_) => "INTERNAL",
        }
    }

    /// Classify a non-2xx response from the upstream API.
    ///
    /// The upstream wraps errors in an envelope
    /// (`{"error": {"code", "message", "status"}}`); when the body is not
    /// that shape the raw text is carried instead.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => {
                let text = body.trim();
                if text.is_empty() {
                    format!("HTTP {status}")
                } else {
                    text.to_string()
                }
            }
        };

        match status {
            401 => Self::Unauthenticated(message),
            403 => Self::PermissionDenied(message),
            404 => Self::NotFound(message),
            _ => Self::Upstream { status, message },
        }
    }
}

/// Error envelope used by the upstream API.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    #[allow(dead_code)]
    code: i32,
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<String>,
}
