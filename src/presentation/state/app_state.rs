use std::sync::Arc;

use crate::application::ports::{AudioTranscoder, GenerativeModel};
use crate::application::services::{AudioAnalysisService, AudioNormalizer};
use crate::domain::PromptKey;
use crate::infrastructure::prompts::PromptStore;

/// Immutable per-process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AudioAnalysisService>,
    pub normalizer: Arc<AudioNormalizer>,
    pub prompts: Arc<PromptStore>,
}

impl AppState {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        transcoder: Arc<dyn AudioTranscoder>,
        prompts: Arc<PromptStore>,
    ) -> Self {
        Self {
            analysis_service: Arc::new(AudioAnalysisService::new(model)),
            normalizer: Arc::new(AudioNormalizer::new(transcoder)),
            prompts,
        }
    }

    /// Instruction text for `key`; empty when the prompt file lacks it.
    pub fn prompt(&self, key: PromptKey) -> &str {
        self.prompts.prompt(key).unwrap_or_default()
    }
}
