use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::ArtifactHandle;

/// Upload / converse / delete primitives of a multimodal generative-model provider.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn upload_file(
        &self,
        data: Bytes,
        mime: &str,
    ) -> Result<ArtifactHandle, GenerativeModelError>;

    /// Sends `[prompt, artifact]` as the single turn of a new, history-free
    /// conversation and returns the reply text.
    async fn generate(
        &self,
        prompt: &str,
        artifact: &ArtifactHandle,
    ) -> Result<String, GenerativeModelError>;

    async fn delete_file(&self, artifact: &ArtifactHandle) -> Result<(), GenerativeModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeModelError {
    #[error("generative model is not configured: {0}")]
    NotConfigured(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("api returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
