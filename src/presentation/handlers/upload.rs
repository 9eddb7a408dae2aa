use axum::extract::Multipart;
use bytes::Bytes;

use super::error::ApiError;

/// Multipart field carrying the audio recording.
pub const AUDIO_FIELD: &str = "audio_file";

pub struct AudioUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Reads the `audio_file` part of the request, skipping any other fields.
pub async fn read_audio_upload(multipart: &mut Multipart) -> Result<AudioUpload, ApiError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Analysis request without an audio file");
                return Err(ApiError::BadRequest(format!(
                    "No file uploaded in field '{}'",
                    AUDIO_FIELD
                )));
            }
            Err(e) => {
                tracing::error!(error = %e, status = %e.status(), "Failed to read multipart");
                return Err(ApiError::from(e));
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, status = %e.status(), "Failed to read file bytes");
            ApiError::from(e)
        })?;

        tracing::debug!(
            filename = %filename,
            content_type = %content_type,
            bytes = data.len(),
            "Audio file received"
        );

        return Ok(AudioUpload {
            filename,
            content_type,
            data,
        });
    }
}
