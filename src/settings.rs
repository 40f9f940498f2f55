use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::StartupError;

/// Environment variable naming an optional settings file.
pub const CONFIG_PATH_VAR: &str = "PORTFOLIO_CONFIG";

/// Prefix for environment overrides, e.g. `PORTFOLIO_PORT`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing)]
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_knowledge_file")]
    pub knowledge_file: PathBuf,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

fn default_gemini_model() -> String {
    "gemini-flash-lite-latest".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_knowledge_file() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_lang() -> String {
    "th".to_string()
}

impl Settings {
    /// Load settings from the optional settings file and the process environment.
    pub fn load() -> Result<Self, StartupError> {
        let file = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let vars: config::Map<String, String> = std::env::vars().collect();
        Self::from_sources(Some(file), vars)
    }

    /// Build settings from an optional file and an explicit set of
    /// environment variables. `PORTFOLIO_*` variables win over the file;
    /// `GEMINI_API_KEY` wins over both.
    pub fn from_sources(
        file: Option<PathBuf>,
        vars: config::Map<String, String>,
    ) -> Result<Self, StartupError> {
        let api_key = vars.get(API_KEY_VAR).cloned();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .source(Some(vars)),
            )
            .set_override_option("gemini_api_key", api_key)?
            .build()?
            .try_deserialize()?;

        if settings.gemini_api_key.trim().is_empty() {
            return Err(StartupError::MissingApiKey);
        }
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Settings::from_sources(None, vars(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, StartupError::MissingApiKey));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let err = Settings::from_sources(None, vars(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, StartupError::MissingApiKey));
    }

    #[test]
    fn test_defaults() {
        let s = Settings::from_sources(None, vars(&[("GEMINI_API_KEY", "AIza-test")])).unwrap();
        assert_eq!(s.gemini_api_key, "AIza-test");
        assert_eq!(s.gemini_model, "gemini-flash-lite-latest");
        assert_eq!(s.default_lang, "th");
        assert_eq!(s.port, 5001);
        assert_eq!(s.knowledge_file, PathBuf::from("data.json"));
        assert_eq!(s.bind_addr(), "127.0.0.1:5001");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 9000\nhost = \"0.0.0.0\"\ndefault_lang = \"en\"").unwrap();

        let s = Settings::from_sources(
            Some(file.path().to_path_buf()),
            vars(&[("GEMINI_API_KEY", "k"), ("PORTFOLIO_PORT", "7000")]),
        )
        .unwrap();
        assert_eq!(s.port, 7000);
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.default_lang, "en");
    }

    #[test]
    fn test_unprefixed_ambient_vars_are_ignored() {
        let s = Settings::from_sources(
            None,
            vars(&[
                ("GEMINI_API_KEY", "k"),
                ("PORT", "80"),
                ("HOST", "0.0.0.0"),
                ("STATIC_DIR", "/srv/other"),
            ]),
        )
        .unwrap();
        assert_eq!(s.port, 5001);
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_prefixed_vars_apply() {
        let s = Settings::from_sources(
            None,
            vars(&[
                ("GEMINI_API_KEY", "k"),
                ("PORTFOLIO_HOST", "0.0.0.0"),
                ("PORTFOLIO_KNOWLEDGE_FILE", "/srv/site/data.json"),
                ("PORTFOLIO_DEFAULT_LANG", "en"),
            ]),
        )
        .unwrap();
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.knowledge_file, PathBuf::from("/srv/site/data.json"));
        assert_eq!(s.default_lang, "en");
    }

    #[test]
    fn test_api_key_from_file_is_used_when_env_is_unset() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "gemini_api_key = \"from-file\"").unwrap();

        let s = Settings::from_sources(Some(file.path().to_path_buf()), vars(&[])).unwrap();
        assert_eq!(s.gemini_api_key, "from-file");
    }

    #[test]
    fn test_missing_settings_file_is_not_an_error() {
        let s = Settings::from_sources(
            Some(PathBuf::from("/nonexistent/portfolio.toml")),
            vars(&[("GEMINI_API_KEY", "k")]),
        )
        .unwrap();
        assert_eq!(s.port, 5001);
    }

    #[test]
    fn test_invalid_port_is_fatal() {
        let err = Settings::from_sources(
            None,
            vars(&[("GEMINI_API_KEY", "k"), ("PORTFOLIO_PORT", "not-a-port")]),
        )
        .unwrap_err();
        assert!(matches!(err, StartupError::Config(_)));
    }
}
