use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{GenerativeModel, GenerativeModelError};
use crate::domain::ArtifactHandle;

/// Stand-in used when no provider credential is configured. Every call fails.
pub struct DisabledGenerativeModel;

const REASON: &str = "GOOGLE_API_KEY is not set";

#[async_trait]
impl GenerativeModel for DisabledGenerativeModel {
    async fn upload_file(
        &self,
        _data: Bytes,
        _mime: &str,
    ) -> Result<ArtifactHandle, GenerativeModelError> {
        Err(GenerativeModelError::NotConfigured(REASON.to_string()))
    }

    async fn generate(
        &self,
        _prompt: &str,
        _artifact: &ArtifactHandle,
    ) -> Result<String, GenerativeModelError> {
        Err(GenerativeModelError::NotConfigured(REASON.to_string()))
    }

    async fn delete_file(&self, _artifact: &ArtifactHandle) -> Result<(), GenerativeModelError> {
        Err(GenerativeModelError::NotConfigured(REASON.to_string()))
    }
}
