mod artifact_handle;
mod audio_mime;
mod prompt_key;
mod uploaded_audio;

pub use artifact_handle::ArtifactHandle;
pub use audio_mime::{AudioMime, is_audio_family};
pub use prompt_key::PromptKey;
pub use uploaded_audio::UploadedAudio;
