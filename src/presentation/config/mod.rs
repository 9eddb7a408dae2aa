mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_ALLOWED_ORIGINS, GeminiSettings, LoggingSettings, PromptSettings, ServerSettings,
    Settings,
};
