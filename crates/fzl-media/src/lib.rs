//! FZL Splits Media
//!
//! Decides what a pane shows for a given media reference:
//! - Image URLs and data URIs render as pannable images
//! - YouTube links are rewritten to their embed URL
//! - Anything else is an opaque external reference
//!
//! Also converts uploaded or pasted image bytes into durable data URIs.

mod classify;
mod error;
mod upload;

pub use classify::{
    assume_transparent, extract_youtube_id, is_durable, is_image_url, is_transient, resolve,
    MediaKind, MediaResolution, IMAGE_EXTENSIONS,
};
pub use error::MediaError;
pub use upload::{
    encode_data_uri, mime_for_path, read_upload, Upload, UploadPolicy, DEFAULT_MAX_UPLOAD_BYTES,
};

pub type Result<T> = std::result::Result<T, MediaError>;
