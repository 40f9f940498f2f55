use async_trait::async_trait;

/// Interface for a single-shot text generation backend.
/// One prompt in, one complete reply out; no history is kept between calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for the prompt and return its text unmodified.
    async fn generate(&self, prompt: &str) -> Result<String, anyhow::Error>;

    fn model(&self) -> &str;
}
