//! Media reference classification
//!
//! Resolution order for typed or pasted text:
//! 1. Image URL (by extension or a known image-serving pattern) → used as-is
//! 2. YouTube link → rewritten to the canonical embed URL
//! 3. Anything else → opaque external reference

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::Url;

pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp"];

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const YOUTUBE_ID_LEN: usize = 11;

static SPECIAL_IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Thumbnail endpoints and inline SVG links that carry no file extension
fn special_image_regex() -> &'static Regex {
    SPECIAL_IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"(?i)(\?q=tbn:|&s$|/img\?|\.svg(\?|$))")
            .expect("Failed to compile special image regex")
    })
}

fn youtube_regex() -> &'static Regex {
    YOUTUBE_REGEX.get_or_init(|| {
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("Failed to compile YouTube regex")
    })
}

/// Result of resolving typed or pasted text into a media reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaResolution {
    /// Nothing to load
    Empty,
    /// Direct image URL
    Image(String),
    /// YouTube video, stored as its embed URL
    YouTube { video_id: String, embed_url: String },
    /// Unrecognized reference, rendered as a placeholder
    External(String),
}

impl MediaResolution {
    /// The reference to store on the split, if any
    pub fn media(&self) -> Option<&str> {
        match self {
            MediaResolution::Empty => None,
            MediaResolution::Image(url) | MediaResolution::External(url) => Some(url),
            MediaResolution::YouTube { embed_url, .. } => Some(embed_url),
        }
    }

    pub fn into_media(self) -> Option<String> {
        match self {
            MediaResolution::Empty => None,
            MediaResolution::Image(url) | MediaResolution::External(url) => Some(url),
            MediaResolution::YouTube { embed_url, .. } => Some(embed_url),
        }
    }
}

/// Resolve user input into the media reference a split should hold
pub fn resolve(input: &str) -> MediaResolution {
    let input = input.trim();

    if input.is_empty() {
        return MediaResolution::Empty;
    }

    if is_image_url(input) {
        return MediaResolution::Image(input.to_string());
    }

    if let Some(video_id) = extract_youtube_id(input) {
        let embed_url = format!("{YOUTUBE_EMBED_BASE}{video_id}");
        return MediaResolution::YouTube {
            video_id,
            embed_url,
        };
    }

    MediaResolution::External(input.to_string())
}

/// Whether `input` is a parseable URL that points at an image
pub fn is_image_url(input: &str) -> bool {
    let Ok(url) = Url::parse(input) else {
        return false;
    };

    let path = url.path().to_lowercase();
    let has_image_extension = IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext));

    has_image_extension || special_image_regex().is_match(input)
}

/// Extract an 11-character YouTube video id from a watch, short, or embed link
pub fn extract_youtube_id(input: &str) -> Option<String> {
    let captures = youtube_regex().captures(input)?;
    let id = captures.get(2)?.as_str();

    (id.chars().count() == YOUTUBE_ID_LEN).then(|| id.to_string())
}

/// Durable references survive a restart: data-URI images and http(s) URLs
pub fn is_durable(media: &str) -> bool {
    media.starts_with("data:image") || media.starts_with("http://") || media.starts_with("https://")
}

/// Blob references die with the session that created them
pub fn is_transient(media: &str) -> bool {
    media.starts_with("blob:")
}

/// Best-effort guess used for styling only: SVGs and thumbnail endpoints
/// are drawn without an opaque backdrop.
pub fn assume_transparent(media: &str) -> bool {
    if media.starts_with("data:image/svg+xml") || media.to_lowercase().contains(".svg") {
        return true;
    }

    media.contains("?q=tbn:") || media.ends_with("&s") || media.contains("/img?")
}

/// Rendering branch for a stored media reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Pannable, zoomable image
    Image,
    /// Embedded video frame
    Video,
    /// Placeholder for an unrecognized reference
    External,
}

impl MediaKind {
    pub fn of(media: &str) -> Self {
        if media.starts_with("data:image") {
            MediaKind::Image
        } else if media.contains("youtube.com") {
            MediaKind::Video
        } else if is_image_url(media) {
            MediaKind::Image
        } else {
            MediaKind::External
        }
    }

    /// Only images take part in drag and zoom
    pub fn is_pannable(&self) -> bool {
        matches!(self, MediaKind::Image)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::External => "external",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
