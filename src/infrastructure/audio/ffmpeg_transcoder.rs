use async_trait::async_trait;
use bytes::Bytes;
use ffmpeg_sidecar::command::{FfmpegCommand, ffmpeg_is_installed};
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use tokio::task;

use crate::application::ports::{AudioTranscoder, AudioTranscoderError};
use crate::domain::AudioMime;

use super::audio_probe::probe_audio;

/// Transcodes audio by running the `ffmpeg` binary over temporary files.
pub struct FfmpegAudioTranscoder;

pub fn check_ffmpeg_binary() -> Result<(), AudioTranscoderError> {
    if ffmpeg_is_installed() {
        Ok(())
    } else {
        Err(AudioTranscoderError::Unavailable(
            "ffmpeg binary not found in PATH".to_string(),
        ))
    }
}

fn encoder_args(target: &AudioMime) -> Result<&'static [&'static str], AudioTranscoderError> {
    match target {
        AudioMime::Mp3 | AudioMime::Mpeg => Ok(&["-vn", "-acodec", "libmp3lame", "-q:a", "4"]),
        AudioMime::Wav => Ok(&["-vn", "-acodec", "pcm_s16le"]),
        other => Err(AudioTranscoderError::Unavailable(format!(
            "no encoder configured for {}",
            other
        ))),
    }
}

fn run_ffmpeg(
    data: &[u8],
    source: &AudioMime,
    target: &AudioMime,
) -> Result<Vec<u8>, AudioTranscoderError> {
    let args = encoder_args(target)?;

    let workdir = tempfile::tempdir()?;
    let input_path = workdir.path().join(format!("input.{}", source.extension()));
    let output_path = workdir.path().join(format!("output.{}", target.extension()));
    std::fs::write(&input_path, data)?;

    let input = input_path.to_string_lossy().into_owned();
    let output = output_path.to_string_lossy().into_owned();

    let mut child = FfmpegCommand::new()
        .hide_banner()
        .overwrite()
        .input(&input)
        .args(args)
        .output(&output)
        .spawn()
        .map_err(|e| AudioTranscoderError::Unavailable(format!("spawn ffmpeg: {}", e)))?;

    let mut errors = Vec::new();
    child
        .iter()
        .map_err(|e| AudioTranscoderError::Unavailable(format!("ffmpeg output: {}", e)))?
        .for_each(|event| match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, msg) | FfmpegEvent::Error(msg) => {
                tracing::debug!(message = %msg, "ffmpeg error output");
                errors.push(msg);
            }
            FfmpegEvent::Log(level, msg) => {
                tracing::trace!(level = ?level, message = %msg, "ffmpeg output")
            }
            _ => {}
        });

    let status = child
        .wait()
        .map_err(|e| AudioTranscoderError::Unavailable(format!("wait for ffmpeg: {}", e)))?;

    if !status.success() {
        let detail = errors
            .last()
            .cloned()
            .unwrap_or_else(|| format!("ffmpeg exited with {}", status));
        return Err(AudioTranscoderError::DecodingFailed(detail));
    }

    if !output_path.exists() {
        return Ok(Vec::new());
    }

    Ok(std::fs::read(&output_path)?)
}

#[async_trait]
impl AudioTranscoder for FfmpegAudioTranscoder {
    async fn transcode(
        &self,
        data: Bytes,
        source: &AudioMime,
        target: &AudioMime,
    ) -> Result<Vec<u8>, AudioTranscoderError> {
        let source_mime = source.clone();
        let target_mime = target.clone();
        let input_bytes = data.len();

        let output = task::spawn_blocking(move || run_ffmpeg(&data, &source_mime, &target_mime))
            .await
            .map_err(|e| AudioTranscoderError::Unavailable(format!("transcode task: {}", e)))??;

        if output.is_empty() {
            tracing::warn!(source = %source, target = %target, "ffmpeg produced no output");
            return Ok(output);
        }

        match probe_audio(&output, target) {
            Ok(summary) => tracing::debug!(
                input_bytes,
                output_bytes = output.len(),
                channels = summary.channels,
                sample_rate = summary.sample_rate,
                duration_secs = summary.duration_secs,
                "Audio transcoded"
            ),
            Err(e) => tracing::warn!(error = %e, "Could not probe transcoded audio"),
        }

        Ok(output)
    }
}
