use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerativeModel, GenerativeModelError};
use crate::domain::ArtifactHandle;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";

const API_KEY_HEADER: &str = "x-goog-api-key";
const UPLOAD_PROTOCOL_HEADER: &str = "x-goog-upload-protocol";

/// Gemini REST client covering the Files API and `generateContent`.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GenerativeModelError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GenerativeModelError::NotConfigured(format!("http client: {}", e)))?;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            api_key,
            base_url,
            model: model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerativeModelError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(GenerativeModelError::ApiStatus { status, body })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn upload_file(
        &self,
        data: Bytes,
        mime: &str,
    ) -> Result<ArtifactHandle, GenerativeModelError> {
        let url = format!("{}/upload/v1beta/files", self.base_url);

        tracing::debug!(bytes = data.len(), mime = %mime, "Uploading audio to Gemini Files API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(UPLOAD_PROTOCOL_HEADER, "raw")
            .header(CONTENT_TYPE, mime)
            .body(data)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("upload: {}", e)))?;

        let uploaded: UploadFileResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(format!("upload body: {}", e)))?;

        let file = uploaded.file;
        Ok(ArtifactHandle::new(
            file.name,
            file.uri,
            file.mime_type.unwrap_or_else(|| mime.to_string()),
        ))
    }

    async fn generate(
        &self,
        prompt: &str,
        artifact: &ArtifactHandle,
    ) -> Result<String, GenerativeModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let mut parts = Vec::with_capacity(2);
        if !prompt.is_empty() {
            parts.push(RequestPart::Text { text: prompt });
        }
        parts.push(RequestPart::FileData {
            file_data: FileData {
                mime_type: &artifact.mime,
                file_uri: &artifact.uri,
            },
        });

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts,
            }],
        };

        tracing::debug!(model = %self.model, artifact = %artifact, "Requesting Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("generate: {}", e)))?;

        let reply: GenerateContentResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(format!("generate body: {}", e)))?;

        let text = reply.text()?;

        tracing::info!(model = %self.model, chars = text.len(), "Gemini reply received");

        Ok(text)
    }

    async fn delete_file(&self, artifact: &ArtifactHandle) -> Result<(), GenerativeModelError> {
        let url = format!("{}/v1beta/{}", self.base_url, artifact.name);

        let response = self
            .client
            .delete(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("delete: {}", e)))?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text { text: &'a str },
    FileData { file_data: FileData<'a> },
}

#[derive(Serialize)]
struct FileData<'a> {
    mime_type: &'a str,
    file_uri: &'a str,
}

#[derive(Deserialize)]
struct UploadFileResponse {
    file: RemoteFile,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteFile {
    name: String,
    uri: String,
    #[serde(default)]
    mime_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn text(self) -> Result<String, GenerativeModelError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(GenerativeModelError::InvalidResponse(reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerativeModelError::InvalidResponse(
                "candidate contains no text".to_string(),
            ));
        }

        Ok(text)
    }
}
