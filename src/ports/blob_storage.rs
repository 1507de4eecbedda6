//! Blob storage port for uploaded image files.
//!
//! The application hands over bytes plus metadata and records the returned
//! URL; upload mechanics, retries, and storage lifecycle belong to the
//! adapter.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// An uploaded file ready to be stored.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Client-supplied file name, used to derive the stored key.
    pub file_name: String,
    /// MIME type reported by the client.
    pub content_type: String,
}

impl FileUpload {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }
}

/// Stores binary payloads and returns publicly resolvable URLs.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store the file and return its public URL.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the blob could not be written
    async fn store(&self, file: FileUpload) -> Result<String, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn BlobStorage) {}
    }

    #[test]
    fn file_upload_holds_metadata() {
        let upload = FileUpload::new(vec![1, 2, 3], "photo.jpg", "image/jpeg");
        assert_eq!(upload.bytes.len(), 3);
        assert_eq!(upload.file_name, "photo.jpg");
        assert_eq!(upload.content_type, "image/jpeg");
    }
}
