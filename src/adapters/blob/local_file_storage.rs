//! Local filesystem implementation of BlobStorage.
//!
//! Writes uploads under a base directory and returns URLs built from a
//! configured public base. Each stored file gets a UUID-prefixed key so
//! repeated uploads of the same file name never collide.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{BlobStorage, FileUpload};

/// Maximum upload size (10 MB).
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Local filesystem blob store.
///
/// # Layout
///
/// ```text
/// {base_path}/
/// ├── 9f2c...-porch.jpg
/// └── 41ab...-cabin.png
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    /// Directory uploads are written into.
    base_path: PathBuf,
    /// Public URL prefix the stored key is appended to.
    public_base_url: String,
}

impl LocalFileStorage {
    pub fn new(base_path: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn storage_key(file_name: &str) -> String {
        // Strip any path components the client may have sent.
        let name = file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_name);
        format!("{}-{}", Uuid::new_v4(), name)
    }
}

#[async_trait]
impl BlobStorage for LocalFileStorage {
    async fn store(&self, file: FileUpload) -> Result<String, DomainError> {
        if file.bytes.is_empty() {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Upload is empty",
            ));
        }
        if file.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Upload exceeds {} bytes", MAX_UPLOAD_BYTES),
            ));
        }

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to create upload directory: {}", e),
            )
        })?;

        let key = Self::storage_key(&file.file_name);
        let path = self.base_path.join(&key);

        let mut out = fs::File::create(&path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to create {}: {}", path.display(), e),
            )
        })?;
        out.write_all(&file.bytes).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to write {}: {}", path.display(), e),
            )
        })?;
        out.flush().await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to flush {}: {}", path.display(), e),
            )
        })?;

        Ok(format!("{}/{}", self.public_base_url, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, bytes: Vec<u8>) -> FileUpload {
        FileUpload::new(bytes, name, "image/jpeg")
    }

    #[tokio::test]
    async fn stores_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://cdn.example.com/uploads/");

        let url = storage
            .store(upload("porch.jpg", vec![0xFF, 0xD8, 0xFF]))
            .await
            .unwrap();

        assert!(url.starts_with("https://cdn.example.com/uploads/"));
        assert!(url.ends_with("-porch.jpg"));

        // The file actually landed on disk under the returned key.
        let key = url.rsplit('/').next().unwrap();
        let written = std::fs::read(dir.path().join(key)).unwrap();
        assert_eq!(written, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn same_name_twice_yields_distinct_urls() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://cdn.example.com");

        let first = storage.store(upload("a.jpg", vec![1])).await.unwrap();
        let second = storage.store(upload("a.jpg", vec![2])).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://cdn.example.com");

        let result = storage.store(upload("a.jpg", Vec::new())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn path_components_in_the_name_are_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://cdn.example.com");

        let url = storage
            .store(upload("../../etc/passwd.jpg", vec![1]))
            .await
            .unwrap();
        assert!(url.ends_with("-passwd.jpg"));
    }
}
