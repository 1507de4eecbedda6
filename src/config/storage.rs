//! Upload storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Blob storage configuration for image uploads.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded files are written into
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Public URL prefix for stored files
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.upload_dir.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE_UPLOAD_DIR"));
        }
        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidPublicBaseUrl);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/uploads".to_string()
}
