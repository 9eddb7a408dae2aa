use axum::Json;
use axum::extract::{Multipart, State};
use serde_json::Value;

use crate::application::services::parse_findings;
use crate::domain::{AudioMime, PromptKey, UploadedAudio, is_audio_family};
use crate::presentation::state::AppState;

use super::analysis::run_analysis;
use super::error::ApiError;
use super::upload::read_audio_upload;

/// Analyzes a recording and returns the model's findings as parsed JSON.
///
/// Accepts any `audio/*` upload; WebM recordings are transcoded to MP3 first.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_audio_json_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let upload = read_audio_upload(&mut multipart).await?;

    if !is_audio_family(&upload.content_type) {
        tracing::warn!(content_type = %upload.content_type, "Rejected non-audio upload");
        return Err(ApiError::BadRequest(
            "The uploaded file is not a valid audio file.".to_string(),
        ));
    }

    let audio = UploadedAudio::new(upload.data, AudioMime::from_mime(&upload.content_type));
    let audio = state.normalizer.normalize(audio).await.map_err(|e| {
        tracing::warn!(error = %e, content_type = %upload.content_type, "Audio normalization failed");
        ApiError::from(e)
    })?;

    let reply = run_analysis(
        &state,
        audio,
        PromptKey::DentalFindingsJsonList,
        &upload.filename,
    )
    .await?;

    let findings = parse_findings(&reply).map_err(|e| {
        tracing::error!(error = %e, "Gemini reply could not be parsed as JSON");
        ApiError::from(e)
    })?;

    Ok(Json(findings))
}
