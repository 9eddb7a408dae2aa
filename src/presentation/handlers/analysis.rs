use crate::domain::{PromptKey, UploadedAudio};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

/// Sends normalized audio plus the prompt for `key` to the model and returns its reply.
pub async fn run_analysis(
    state: &AppState,
    audio: UploadedAudio,
    key: PromptKey,
    filename: &str,
) -> Result<String, ApiError> {
    let prompt = state.prompt(key);
    if prompt.is_empty() {
        tracing::warn!(prompt_key = %key, "No prompt configured; sending audio without instructions");
    }

    tracing::info!(
        filename = %filename,
        prompt_key = %key,
        prompt = %sanitize_prompt(prompt),
        "Sending audio and prompt to Gemini"
    );

    // Cleanup failures are logged by the service.
    let outcome = state.analysis_service.analyze(audio, prompt).await;

    outcome.into_result().map_err(|e| {
        tracing::error!(error = %e, filename = %filename, "Audio analysis with Gemini failed");
        ApiError::from(e)
    })
}
