use std::sync::Arc;

use crate::settings::Settings;
use crate::error::StartupError;
use crate::llm::{GeminiLLM, TextGenerator};
use crate::templates::TemplateEngine;
use crate::translations::TranslationStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub translations: Arc<TranslationStore>,
    pub templates: Arc<TemplateEngine>,
    pub llm: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, StartupError> {
        let translations =
            TranslationStore::load(&settings.knowledge_file, &settings.default_lang)?;
        let templates = TemplateEngine::new(&settings.templates_dir)?;
        let llm = Arc::new(GeminiLLM::new(
            settings.gemini_base_url.clone(),
            settings.gemini_model.clone(),
            settings.gemini_api_key.clone(),
        ));

        Ok(Self::with_generator(settings, translations, templates, llm))
    }

    pub fn with_generator(
        settings: Settings,
        translations: TranslationStore,
        templates: TemplateEngine,
        llm: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            translations: Arc::new(translations),
            templates: Arc::new(templates),
            llm,
        }
    }
}
