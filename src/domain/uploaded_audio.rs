use bytes::Bytes;

use super::audio_mime::AudioMime;

/// Audio bytes as received from the caller, or as produced by normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub data: Bytes,
    pub mime: AudioMime,
}

impl UploadedAudio {
    pub fn new(data: impl Into<Bytes>, mime: AudioMime) -> Self {
        Self {
            data: data.into(),
            mime,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
