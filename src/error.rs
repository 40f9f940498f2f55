use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Failures that stop the server before it binds a socket.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("GEMINI_API_KEY not found in environment")]
    MissingApiKey,

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("could not read knowledge file {path}: {source}")]
    KnowledgeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse knowledge file {path}: {source}")]
    KnowledgeParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("knowledge file must be a JSON object keyed by language code")]
    KnowledgeNotObject,

    #[error("knowledge file has no entry for default language '{0}'")]
    MissingDefaultLanguage(String),

    #[error("templates directory {0} does not exist")]
    TemplatesDirMissing(PathBuf),

    #[error("failed to load template {name}: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

/// Request-time failures. Every variant is logged and reported to the
/// client as an opaque 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid chat request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("chat request has no message")]
    MissingMessage,

    #[error("failed to serialize knowledge base: {0}")]
    Prompt(#[source] serde_json::Error),

    #[error("text generation failed: {0:#}")]
    Generation(#[source] anyhow::Error),

    #[error("failed to render template {name}: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Server error"})),
        )
            .into_response()
    }
}
