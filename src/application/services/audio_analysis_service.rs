use std::sync::Arc;

use crate::application::ports::{GenerativeModel, GenerativeModelError};
use crate::domain::{ArtifactHandle, UploadedAudio};

/// Runs one audio file through the generative model: upload, ask, clean up.
pub struct AudioAnalysisService {
    model: Arc<dyn GenerativeModel>,
}

impl AudioAnalysisService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub async fn analyze(&self, audio: UploadedAudio, prompt: &str) -> AnalysisOutcome {
        let mime = audio.mime.as_mime().to_string();
        let bytes = audio.len();

        let artifact = match self.model.upload_file(audio.data, &mime).await {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::error!(error = %e, mime = %mime, "Audio upload failed");
                return AnalysisOutcome {
                    result: Err(AnalysisError::Upload(e)),
                    cleanup_failure: None,
                };
            }
        };

        tracing::info!(artifact = %artifact, bytes, mime = %mime, "Audio uploaded temporarily");

        let lease = ArtifactLease::new(Arc::clone(&self.model), artifact);

        let result = self
            .model
            .generate(prompt, lease.artifact())
            .await
            .map_err(AnalysisError::Generation);

        if let Err(e) = &result {
            tracing::error!(error = %e, artifact = %lease.artifact(), "Model conversation failed");
        }

        let cleanup_failure = lease.release().await.err();

        AnalysisOutcome {
            result,
            cleanup_failure,
        }
    }
}

/// Primary result of an analysis plus the outcome of artifact cleanup.
///
/// A cleanup failure never replaces the primary result.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub result: Result<String, AnalysisError>,
    pub cleanup_failure: Option<GenerativeModelError>,
}

impl AnalysisOutcome {
    pub fn into_result(self) -> Result<String, AnalysisError> {
        self.result
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("upload: {0}")]
    Upload(GenerativeModelError),
    #[error("generation: {0}")]
    Generation(GenerativeModelError),
}

/// Owns an uploaded artifact until it is deleted.
///
/// `release` deletes it on the normal path. If the lease is dropped unreleased
/// (the request future was cancelled), deletion is handed to the runtime.
struct ArtifactLease {
    model: Arc<dyn GenerativeModel>,
    artifact: ArtifactHandle,
    released: bool,
}

impl ArtifactLease {
    fn new(model: Arc<dyn GenerativeModel>, artifact: ArtifactHandle) -> Self {
        Self {
            model,
            artifact,
            released: false,
        }
    }

    fn artifact(&self) -> &ArtifactHandle {
        &self.artifact
    }

    /// Deletes the artifact. Once called, `Drop` never issues a second delete,
    /// even if this future is cancelled mid-request.
    async fn release(mut self) -> Result<(), GenerativeModelError> {
        self.released = true;
        let deleted = self.model.delete_file(&self.artifact).await;

        match deleted {
            Ok(()) => {
                tracing::info!(artifact = %self.artifact, "Temporary artifact deleted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, artifact = %self.artifact, "Failed to delete temporary artifact");
                Err(e)
            }
        }
    }
}

impl Drop for ArtifactLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(artifact = %self.artifact, "No runtime to delete abandoned artifact");
            return;
        };

        let model = Arc::clone(&self.model);
        let artifact = self.artifact.clone();
        runtime.spawn(async move {
            match model.delete_file(&artifact).await {
                Ok(()) => tracing::info!(artifact = %artifact, "Abandoned artifact deleted"),
                Err(e) => {
                    tracing::warn!(error = %e, artifact = %artifact, "Failed to delete abandoned artifact")
                }
            }
        });
    }
}
