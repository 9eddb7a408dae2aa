use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::domain::PromptKey;

/// Instruction prompts keyed by name, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    prompts: HashMap<String, String>,
}

impl PromptStore {
    pub fn new(prompts: HashMap<String, String>) -> Self {
        Self { prompts }
    }

    /// Loads prompts from a JSON object file.
    ///
    /// A missing file, invalid JSON, or any other read failure is logged and
    /// yields an empty store so the service can still start.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Prompt file not found; endpoints will run without instructions"
                );
                return Self::default();
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Unexpected error reading prompt file");
                return Self::default();
            }
        };

        let parsed = match serde_json::from_str::<serde_json::Map<String, Value>>(&raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Prompt file is not a valid JSON object");
                return Self::default();
            }
        };

        let mut prompts = HashMap::with_capacity(parsed.len());
        for (key, value) in parsed {
            match value {
                Value::String(text) => {
                    prompts.insert(key, text);
                }
                other => {
                    tracing::warn!(key = %key, kind = %json_kind(&other), "Skipping non-string prompt");
                }
            }
        }

        tracing::info!(path = %path.display(), count = prompts.len(), "Prompts loaded");

        for key in [PromptKey::DentalFindingsJsonList, PromptKey::DentalFindingsDocList] {
            if !prompts.contains_key(key.as_str()) {
                tracing::warn!(key = %key, "Prompt file is missing an expected key");
            }
        }

        Self { prompts }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.prompts.get(key).map(String::as_str)
    }

    pub fn prompt(&self, key: PromptKey) -> Option<&str> {
        self.get(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
