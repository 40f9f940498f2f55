use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::StartupError;

/// Language code -> knowledge base, loaded once at startup.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    table: Map<String, Value>,
    default_lang: String,
}

impl TranslationStore {
    pub fn load(path: &Path, default_lang: &str) -> Result<Self, StartupError> {
        let content = fs::read_to_string(path).map_err(|source| StartupError::KnowledgeRead {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| StartupError::KnowledgeParse {
                path: path.to_path_buf(),
                source,
            })?;
        let store = Self::from_value(value, default_lang)?;
        info!(
            "Loaded knowledge base from {} ({} languages)",
            path.display(),
            store.table.len()
        );
        Ok(store)
    }

    pub fn from_value(value: Value, default_lang: &str) -> Result<Self, StartupError> {
        let Value::Object(table) = value else {
            return Err(StartupError::KnowledgeNotObject);
        };
        if !table.contains_key(default_lang) {
            return Err(StartupError::MissingDefaultLanguage(default_lang.to_string()));
        }
        Ok(Self {
            table,
            default_lang: default_lang.to_string(),
        })
    }

    /// Returns the requested code if the table has it, otherwise the default.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(code) if self.table.contains_key(code) => code,
            _ => &self.default_lang,
        }
    }

    /// Knowledge base for a language, falling back to the default.
    pub fn knowledge(&self, lang: &str) -> &Value {
        let lang = self.resolve(Some(lang));
        // the default key is checked at construction
        &self.table[lang]
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.table.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn table(&self) -> &Map<String, Value> {
        &self.table
    }
}
