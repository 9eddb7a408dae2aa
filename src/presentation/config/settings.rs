use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 6] = [
    "http://localhost:8000",
    "http://localhost:3000",
    "http://127.0.0.1:8000",
    "http://127.0.0.1:3000",
    "null",
    "https://odontograma-g7hyemacauerc5ac.canadacentral-01.azurewebsites.net",
];

const DEFAULT_MAX_UPLOAD_BYTES: i64 = 25 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    pub prompts: PromptSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Loads settings from `appsettings.toml`, `appsettings.<environment>.toml`
    /// and `APP_*` environment variables in the working directory.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment)
    }

    pub fn load_from(dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let base = dir.join("appsettings");
        let overlay = dir.join(format!("appsettings.{}", environment.as_str()));

        let default_origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
            .set_default("server.allowed_origins", default_origins)?
            .set_default("prompts.path", "prompts/prompts.json")?
            .set_default("logging.json", false)?
            .add_source(File::from(base).required(false))
            .add_source(File::from(overlay).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", std::env::var("GOOGLE_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}
