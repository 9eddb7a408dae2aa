mod audio_transcoder;
mod generative_model;

pub use audio_transcoder::{AudioTranscoder, AudioTranscoderError};
pub use generative_model::{GenerativeModel, GenerativeModelError};
