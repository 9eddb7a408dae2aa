use axum::Json;
use axum::extract::{Multipart, State};

use crate::domain::{AudioMime, PromptKey, UploadedAudio, is_audio_family};
use crate::presentation::state::AppState;

use super::analysis::run_analysis;
use super::error::ApiError;
use super::upload::read_audio_upload;

/// Analyzes a WAV/MP3 recording and returns the model's reply text unchanged.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_audio_doc_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<String>, ApiError> {
    let upload = read_audio_upload(&mut multipart).await?;

    if !is_audio_family(&upload.content_type) {
        tracing::warn!(content_type = %upload.content_type, "Rejected non-audio upload");
        return Err(ApiError::BadRequest(
            "The uploaded file is not a valid audio file.".to_string(),
        ));
    }

    let mime = AudioMime::from_mime(&upload.content_type);
    if !mime.is_natively_accepted() {
        tracing::warn!(content_type = %upload.content_type, "Rejected audio type for direct upload");
        return Err(ApiError::BadRequest(format!(
            "Audio type not supported by Gemini for direct upload: {}. Try {}.",
            upload.content_type,
            AudioMime::describe_set(&AudioMime::NATIVELY_ACCEPTED)
        )));
    }

    let reply = run_analysis(
        &state,
        UploadedAudio::new(upload.data, mime),
        PromptKey::DentalFindingsDocList,
        &upload.filename,
    )
    .await?;

    Ok(Json(reply))
}
