/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` still forces JSON output when `json_format` is false.
    pub fn new(environment: impl Into<String>, json_format: bool) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment.into(),
            json_format: json_format || defaults.json_format,
            default_filter: defaults.default_filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            default_filter: "info,odontograma=debug,tower_http=debug".to_string(),
        }
    }
}
