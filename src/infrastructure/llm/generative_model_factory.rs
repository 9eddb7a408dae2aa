use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{GenerativeModel, GenerativeModelError};
use crate::presentation::config::GeminiSettings;

use super::disabled_model::DisabledGenerativeModel;
use super::gemini_client::GeminiClient;

pub struct GenerativeModelFactory;

impl GenerativeModelFactory {
    /// Builds the Gemini client, or a disabled model when no API key is configured.
    pub fn create(
        settings: &GeminiSettings,
    ) -> Result<Arc<dyn GenerativeModel>, GenerativeModelError> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty());

        match api_key {
            Some(key) => {
                let client = GeminiClient::new(
                    key.to_string(),
                    settings.base_url.clone(),
                    settings.model.clone(),
                    settings.request_timeout_secs.map(Duration::from_secs),
                )?;
                tracing::info!(model = %client.model(), "Gemini API key loaded");
                Ok(Arc::new(client))
            }
            None => {
                tracing::warn!(
                    "GOOGLE_API_KEY not configured; audio analysis endpoints will fail until it is set"
                );
                Ok(Arc::new(DisabledGenerativeModel))
            }
        }
    }
}
