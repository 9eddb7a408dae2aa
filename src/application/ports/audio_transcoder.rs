use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AudioMime;

#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    /// Decodes `data` as `source` and re-encodes it as `target`.
    async fn transcode(
        &self,
        data: Bytes,
        source: &AudioMime,
        target: &AudioMime,
    ) -> Result<Vec<u8>, AudioTranscoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioTranscoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcoder unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
