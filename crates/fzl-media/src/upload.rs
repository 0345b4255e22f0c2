//! Upload encoding
//!
//! Dropped files, chosen files and pasted image data all go through one
//! conversion: bytes → `data:<mime>;base64,<payload>`. The resulting string
//! is durable, so it survives a restart once persisted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

use crate::error::MediaError;
use crate::Result;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const DEFAULT_ACCEPTED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp", "svg"];

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Byte ceiling for a single file
    pub max_bytes: u64,
    /// Lowercase file extensions accepted from the file system
    pub accepted_extensions: Vec<String>,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    pub fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_bytes {
            return Err(MediaError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    pub fn accepts_path(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.accepted_extensions.iter().any(|a| *a == ext))
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

/// An encoded upload, ready to be stored as split media
#[derive(Debug, Clone)]
pub struct Upload {
    pub mime: String,
    pub size: u64,
    pub data_uri: String,
}

/// Encode raw image bytes as a data URI, enforcing the size ceiling
pub fn encode_data_uri(mime: &str, bytes: &[u8], policy: &UploadPolicy) -> Result<Upload> {
    let mime = mime.trim().to_lowercase();
    if !mime.starts_with("image/") {
        return Err(MediaError::UnsupportedType(mime));
    }

    let size = bytes.len() as u64;
    policy.check_size(size)?;

    let data_uri = format!("data:{};base64,{}", mime, STANDARD.encode(bytes));

    Ok(Upload {
        mime,
        size,
        data_uri,
    })
}

/// MIME type inferred from a file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let mime = match extension_of(path)?.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}

/// Read a user-chosen or dropped file and encode it.
///
/// The size is checked from metadata before any bytes are read.
pub async fn read_upload(path: impl AsRef<Path>, policy: &UploadPolicy) -> Result<Upload> {
    let path = path.as_ref();

    if !policy.accepts_path(path) {
        return Err(MediaError::UnsupportedType(path.display().to_string()));
    }
    let mime = mime_for_path(path)
        .ok_or_else(|| MediaError::UnsupportedType(path.display().to_string()))?;

    let metadata = tokio::fs::metadata(path).await?;
    policy.check_size(metadata.len())?;

    let bytes = tokio::fs::read(path).await?;
    let upload = encode_data_uri(mime, &bytes, policy)?;

    tracing::debug!(
        path = %path.display(),
        mime = %upload.mime,
        size = upload.size,
        "Encoded upload"
    );

    Ok(upload)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
