use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// How the orchestration host should treat a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Abort the workflow; retrying with the same inputs will not help.
    Fatal,
    /// Retry the operation later.
    Transient,
}

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Parameters passed to server were incorrect. Call was to {url}, and response was {status}: {body}")]
    Rejected { url: String, status: u16, body: String },

    #[error("Server is currently unavailable. Call was to {url}, and response was {status}: {body}")]
    Unavailable { url: String, status: u16, body: String },

    #[error("Call to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    #[error("Invalid value for configuration key {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Expected PEM encoded certificate, but saw: {0}")]
    InvalidCertificate(String),

    #[error("Certificate could not be loaded: {0}")]
    CertificateLoad(String),

    #[error("Certificate staging failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid operation context: {0}")]
    InvalidContext(String),
}

impl PluginError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PluginError::Unavailable { .. } | PluginError::Transport { .. } => ErrorKind::Transient,
            _ => ErrorKind::Fatal,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }

    pub fn invalid_value(key: &str, reason: impl Into<String>) -> Self {
        PluginError::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for PluginError {
    fn from(err: reqwest::Error) -> Self {
        PluginError::Transport {
            url: err.url().map(|url| url.to_string()).unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for PluginError {
    fn from(rejection: JsonRejection) -> Self {
        PluginError::InvalidContext(rejection.body_text())
    }
}

impl IntoResponse for PluginError {
    fn into_response(self) -> Response {
        let status = match &self {
            PluginError::Unavailable { .. } | PluginError::Transport { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            PluginError::UnknownOperation(_) => StatusCode::NOT_FOUND,
            PluginError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let message = self.to_string();
        tracing::error!("Error: {}: {}", status, message);

        let body = Json(json!({
            "error": message,
            "kind": self.kind(),
            "recoverable": self.is_recoverable(),
        }));

        (status, body).into_response()
    }
}
