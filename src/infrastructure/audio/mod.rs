mod audio_probe;
mod ffmpeg_transcoder;

pub use audio_probe::{AudioSummary, probe_audio};
pub use ffmpeg_transcoder::{FfmpegAudioTranscoder, check_ffmpeg_binary};
