use std::sync::Arc;

use crate::application::ports::{AudioTranscoder, AudioTranscoderError};
use crate::domain::{AudioMime, UploadedAudio};

/// Mime every transcoded upload is converted to.
const TRANSCODE_TARGET: AudioMime = AudioMime::Mpeg;

/// Brings uploaded audio into an encoding the generative model accepts.
pub struct AudioNormalizer {
    transcoder: Arc<dyn AudioTranscoder>,
}

impl AudioNormalizer {
    pub fn new(transcoder: Arc<dyn AudioTranscoder>) -> Self {
        Self { transcoder }
    }

    /// Every mime `normalize` can handle, natively or by transcoding.
    pub fn supported_mimes() -> Vec<AudioMime> {
        let mut supported = AudioMime::NATIVELY_ACCEPTED.to_vec();
        supported.push(AudioMime::Webm);
        supported
    }

    pub async fn normalize(&self, audio: UploadedAudio) -> Result<UploadedAudio, NormalizeError> {
        let normalized = if audio.mime.is_natively_accepted() {
            audio
        } else if audio.mime.needs_transcoding() {
            tracing::debug!(
                source = %audio.mime,
                target = %TRANSCODE_TARGET,
                bytes = audio.len(),
                "Transcoding uploaded audio"
            );

            let converted = self
                .transcoder
                .transcode(audio.data, &audio.mime, &TRANSCODE_TARGET)
                .await
                .map_err(NormalizeError::Transcoding)?;

            UploadedAudio::new(converted, TRANSCODE_TARGET)
        } else {
            return Err(NormalizeError::UnsupportedMediaType {
                mime: audio.mime.to_string(),
                accepted: AudioMime::describe_set(&Self::supported_mimes()),
            });
        };

        if normalized.is_empty() {
            return Err(NormalizeError::EmptyOutput);
        }

        Ok(normalized)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("unsupported audio type: {mime}. Supported: {accepted}")]
    UnsupportedMediaType { mime: String, accepted: String },
    #[error("audio preparation produced no data")]
    EmptyOutput,
    #[error("transcoding: {0}")]
    Transcoding(AudioTranscoderError),
}
