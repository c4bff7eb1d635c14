use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Kind of media a web resource holds, derived from its declared MIME type.
///
/// `Other` covers a recognizable but non-classifiable MIME type; `Unknown`
/// covers a blank or absent one. Both always earn the lowest applicable tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Image,
    Text,
    Video,
    #[serde(rename = "3d")]
    ThreeD,
    Other,
    Unknown,
}

/// MIME base types (beyond `text/*`) that count as displayable text.
const TEXT_APPLICATION_TYPES: &[&str] = &[
    "application/pdf",
    "application/xhtml+xml",
    "application/rtf",
    "application/epub+zip",
];

impl MediaKind {
    /// Derive the media kind from a MIME type declaration.
    ///
    /// Parameters are stripped and the base type lowercased before matching,
    /// so `IMAGE/JPEG; charset=UTF-8` is an image. Blank or absent input is
    /// `Unknown`.
    pub fn from_mime_type(mime_type: Option<&str>) -> MediaKind {
        let base = match mime_type.map(base_type) {
            Some(base) if !base.is_empty() => base,
            _ => return MediaKind::Unknown,
        };
        if base.starts_with("audio/") {
            MediaKind::Audio
        } else if base.starts_with("image/") {
            MediaKind::Image
        } else if base.starts_with("video/") {
            MediaKind::Video
        } else if base.starts_with("text/") || TEXT_APPLICATION_TYPES.contains(&base.as_str()) {
            MediaKind::Text
        } else if base.starts_with("model/") {
            MediaKind::ThreeD
        } else {
            MediaKind::Other
        }
    }
}

/// Strip the parameters off a MIME type declaration and lowercase the base
/// type, e.g. `Text/Plain; charset=UTF-8` becomes `text/plain`.
pub fn base_type(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Image => write!(f, "image"),
            MediaKind::Text => write!(f, "text"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::ThreeD => write!(f, "3d"),
            MediaKind::Other => write!(f, "other"),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}
