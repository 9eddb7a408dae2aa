use std::fmt;

/// Reference to a file temporarily stored by the generative-model provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    /// Provider resource name, e.g. `files/abc123`. Used for deletion.
    pub name: String,
    /// URI the model reads the file from.
    pub uri: String,
    pub mime: String,
}

impl ArtifactHandle {
    pub fn new(name: impl Into<String>, uri: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            mime: mime.into(),
        }
    }
}

impl fmt::Display for ArtifactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
