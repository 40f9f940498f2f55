pub mod text_generator;
pub mod gemini;

pub use text_generator::*;
pub use gemini::GeminiLLM;
