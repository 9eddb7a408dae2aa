#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, header};
use bytes::Bytes;

use odontograma::application::ports::{
    AudioTranscoder, AudioTranscoderError, GenerativeModel, GenerativeModelError,
};
use odontograma::domain::{ArtifactHandle, AudioMime, PromptKey};
use odontograma::infrastructure::prompts::PromptStore;
use odontograma::presentation::{AppState, ServerSettings, create_router};

pub const BOUNDARY: &str = "odontograma-test-boundary";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const JSON_PROMPT: &str = "List the dental findings as JSON";
pub const DOC_PROMPT: &str = "Write the dental findings report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    Generate,
    Delete,
}

/// In-memory `GenerativeModel` that counts calls and fails on demand.
#[derive(Default)]
pub struct StubModel {
    reply: String,
    failing: Vec<Stage>,
    hang_on_generate: bool,
    delete_delay: Option<Duration>,
    pub uploads: AtomicUsize,
    pub generates: AtomicUsize,
    pub deletes: AtomicUsize,
    pub uploaded_mimes: Mutex<Vec<String>>,
    pub uploaded_bytes: Mutex<Vec<Bytes>>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }

    pub fn failing_at(mut self, stage: Stage) -> Self {
        self.failing.push(stage);
        self
    }

    pub fn hanging_on_generate(mut self) -> Self {
        self.hang_on_generate = true;
        self
    }

    pub fn slow_delete(mut self, delay: Duration) -> Self {
        self.delete_delay = Some(delay);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
            + self.generates.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }

    fn fails(&self, stage: Stage) -> bool {
        self.failing.contains(&stage)
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn upload_file(
        &self,
        data: Bytes,
        mime: &str,
    ) -> Result<ArtifactHandle, GenerativeModelError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        if self.fails(Stage::Upload) {
            return Err(GenerativeModelError::ApiRequestFailed(
                "upload exploded".to_string(),
            ));
        }
        self.uploaded_mimes.lock().unwrap().push(mime.to_string());
        self.uploaded_bytes.lock().unwrap().push(data);
        Ok(ArtifactHandle::new(
            "files/stub-1",
            "https://stub.test/v1beta/files/stub-1",
            mime,
        ))
    }

    async fn generate(
        &self,
        prompt: &str,
        _artifact: &ArtifactHandle,
    ) -> Result<String, GenerativeModelError> {
        self.generates.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.hang_on_generate {
            std::future::pending::<()>().await;
        }
        if self.fails(Stage::Generate) {
            return Err(GenerativeModelError::ApiStatus {
                status: 503,
                body: "model overloaded".to_string(),
            });
        }
        Ok(self.reply.clone())
    }

    async fn delete_file(&self, _artifact: &ArtifactHandle) -> Result<(), GenerativeModelError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delete_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fails(Stage::Delete) {
            return Err(GenerativeModelError::ApiRequestFailed(
                "delete exploded".to_string(),
            ));
        }
        Ok(())
    }
}

pub enum TranscoderBehavior {
    Produce(Vec<u8>),
    FailDecoding,
}

/// `AudioTranscoder` returning canned output.
pub struct StubTranscoder {
    behavior: TranscoderBehavior,
    pub calls: AtomicUsize,
    pub targets: Mutex<Vec<AudioMime>>,
}

impl StubTranscoder {
    pub fn producing(output: &[u8]) -> Self {
        Self::with(TranscoderBehavior::Produce(output.to_vec()))
    }

    pub fn failing() -> Self {
        Self::with(TranscoderBehavior::FailDecoding)
    }

    fn with(behavior: TranscoderBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            targets: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AudioTranscoder for StubTranscoder {
    async fn transcode(
        &self,
        _data: Bytes,
        _source: &AudioMime,
        target: &AudioMime,
    ) -> Result<Vec<u8>, AudioTranscoderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.targets.lock().unwrap().push(target.clone());
        match &self.behavior {
            TranscoderBehavior::Produce(output) => Ok(output.clone()),
            TranscoderBehavior::FailDecoding => Err(AudioTranscoderError::DecodingFailed(
                "EBML header parsing failed".to_string(),
            )),
        }
    }
}

pub fn test_prompts() -> PromptStore {
    PromptStore::new(HashMap::from([
        (
            PromptKey::DentalFindingsJsonList.as_str().to_string(),
            JSON_PROMPT.to_string(),
        ),
        (
            PromptKey::DentalFindingsDocList.as_str().to_string(),
            DOC_PROMPT.to_string(),
        ),
    ]))
}

pub fn test_server_settings() -> ServerSettings {
    ServerSettings {
        host: "127.0.0.1".to_string(),
        port: 0,
        max_upload_bytes: 1024 * 1024,
        allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
    }
}

pub fn create_test_app(
    model: Arc<dyn GenerativeModel>,
    transcoder: Arc<dyn AudioTranscoder>,
    prompts: PromptStore,
) -> axum::Router {
    let state = AppState::new(model, transcoder, Arc::new(prompts));
    create_router(state, &test_server_settings())
}

/// Builds a `multipart/form-data` body with a single file part.
pub fn multipart_body(
    field: &str,
    filename: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    if let Some(content_type) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(path: &str, content_type: Option<&str>, data: &[u8]) -> Request<Body> {
    upload_request_with_field(path, "audio_file", content_type, data)
}

pub fn upload_request_with_field(
    path: &str,
    field: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(
            field,
            "dictation.bin",
            content_type,
            data,
        )))
        .unwrap()
}

/// 16-bit PCM WAV with interleaved `samples`.
pub fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let data_size = (samples.len() * 2) as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * block_align as u32;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

/// One second of a 440 Hz tone, interleaved across `channels`.
pub fn tone(sample_rate: u32, channels: u16) -> Vec<i16> {
    (0..sample_rate)
        .flat_map(|i| {
            let t = i as f32 / sample_rate as f32;
            let s = ((t * 440.0 * std::f32::consts::TAU).sin() * 8000.0) as i16;
            std::iter::repeat_n(s, channels as usize)
        })
        .collect()
}

pub fn ffmpeg_has_encoder(name: &str) -> bool {
    std::process::Command::new("ffmpeg")
        .args(["-hide_banner", "-encoders"])
        .output()
        .map(|o| o.status.success() && String::from_utf8_lossy(&o.stdout).contains(name))
        .unwrap_or(false)
}
