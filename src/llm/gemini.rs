//! Google Gemini `generateContent` client.
//!
//! Auth is the `key` query parameter; the key is never logged.

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use super::text_generator::TextGenerator;

pub struct GeminiLLM {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiLLM {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        info!("Initialized GeminiLLM: model={}, base_url={}", model, base_url);
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().map(|p| p.text.as_str()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiLLM {
    async fn generate(&self, prompt: &str) -> Result<String, anyhow::Error> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("gemini: POST models/{}:generateContent", self.model);
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("gemini returned {}: {}", status, text));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .context("gemini: failed to parse response")?;

        let text = parsed
            .text()
            .ok_or_else(|| anyhow!("gemini response contained no text"))?;

        debug!(
            "gemini: {} chars in {}ms",
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
