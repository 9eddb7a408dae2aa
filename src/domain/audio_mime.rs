use std::fmt;

/// Audio media types understood by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AudioMime {
    Wav,
    Mp3,
    Mpeg,
    Webm,
    Unrecognized(String),
}

impl AudioMime {
    /// Encodings the generative model accepts for direct upload.
    pub const NATIVELY_ACCEPTED: [AudioMime; 3] = [AudioMime::Wav, AudioMime::Mp3, AudioMime::Mpeg];

    /// Parses a declared `Content-Type`, ignoring parameters such as `;codecs=opus`.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "audio/wav" => Self::Wav,
            "audio/mp3" => Self::Mp3,
            "audio/mpeg" => Self::Mpeg,
            "audio/webm" => Self::Webm,
            _ => Self::Unrecognized(mime.trim().to_string()),
        }
    }

    pub fn as_mime(&self) -> &str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Webm => "audio/webm",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_natively_accepted(&self) -> bool {
        matches!(self, Self::Wav | Self::Mp3 | Self::Mpeg)
    }

    pub fn needs_transcoding(&self) -> bool {
        matches!(self, Self::Webm)
    }

    /// File extension used when the bytes have to touch disk.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 | Self::Mpeg => "mp3",
            Self::Webm => "webm",
            Self::Unrecognized(_) => "bin",
        }
    }

    /// Human readable list of mimes, e.g. `audio/wav, audio/mp3`.
    pub fn describe_set(set: &[AudioMime]) -> String {
        set.iter()
            .map(AudioMime::as_mime)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// True when a declared content type belongs to the `audio/*` family.
pub fn is_audio_family(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("audio/")
}

impl fmt::Display for AudioMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}
