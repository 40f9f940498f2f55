use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::AppError;
use crate::prompt::build_prompt;
use crate::state::AppState;
use crate::templates::Page;

/// Raw query pairs; repeated keys are kept so the first `lang` wins.
type QueryPairs = Query<Vec<(String, String)>>;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Any JSON value; anything that is not a known code falls back.
    #[serde(default)]
    pub lang: Value,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

// An unparseable query string is treated like a missing `lang`.
pub async fn index(
    State(state): State<AppState>,
    query: Option<QueryPairs>,
) -> Result<Html<String>, AppError> {
    render(&state, Page::Home, query)
}

pub async fn blog(
    State(state): State<AppState>,
    query: Option<QueryPairs>,
) -> Result<Html<String>, AppError> {
    render(&state, Page::Blog, query)
}

fn render(
    state: &AppState,
    page: Page,
    query: Option<QueryPairs>,
) -> Result<Html<String>, AppError> {
    let requested = query.and_then(|Query(pairs)| {
        pairs
            .into_iter()
            .find(|(key, _)| key == "lang")
            .map(|(_, value)| value)
    });
    let lang = state.translations.resolve(requested.as_deref());
    debug!("Rendering {} in {}", page.template_name(), lang);

    state
        .templates
        .render_page(page, &state.translations, lang)
        .map(Html)
        .map_err(|source| AppError::Render {
            name: page.template_name(),
            source,
        })
}

pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatReply>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(AppError::InvalidBody)?;
    let message = request.message.ok_or(AppError::MissingMessage)?;
    let lang = state.translations.resolve(request.lang.as_str());

    let prompt = build_prompt(state.translations.knowledge(lang), lang, &message)
        .map_err(AppError::Prompt)?;

    info!("Chat request: lang={}, {} chars", lang, message.chars().count());
    let reply = state
        .llm
        .generate(&prompt)
        .await
        .map_err(AppError::Generation)?;

    Ok(Json(ChatReply { reply }))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "default_lang": state.translations.default_lang(),
        "languages": state.translations.languages(),
        "model": state.llm.model(),
    }))
}
