use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use super::media_kind::base_type;
use super::{LicenseCategory, LinkRole, MediaKind};

/// Declared primary media category of a record (the EDM type), used to
/// select a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdmType {
    #[serde(rename = "SOUND")]
    Sound,
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "VIDEO")]
    Video,
    #[serde(rename = "3D")]
    ThreeD,
}

impl EdmType {
    /// Parse a declared edm:type value; unrecognized values are absent.
    pub fn from_declared(value: &str) -> Option<EdmType> {
        match value {
            "SOUND" => Some(EdmType::Sound),
            "IMAGE" => Some(EdmType::Image),
            "TEXT" => Some(EdmType::Text),
            "VIDEO" => Some(EdmType::Video),
            "3D" => Some(EdmType::ThreeD),
            _ => None,
        }
    }
}

/// Technical facts about one media resource (web resource) of a record, as
/// supplied by the web-resource accessor. Immutable per classification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaResource {
    /// The resource's rdf:about URL.
    pub about: String,
    /// Declared MIME type, possibly with parameters.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Total pixel count, for images.
    #[serde(default)]
    pub pixel_count: Option<u64>,
    /// Vertical resolution in pixels, for videos.
    #[serde(default)]
    pub height: Option<u64>,
    /// Resource-level license, overriding the record-level one.
    #[serde(default)]
    pub license: Option<LicenseCategory>,
    /// Roles with which the record links to this resource.
    #[serde(default)]
    pub roles: BTreeSet<LinkRole>,
}

impl MediaResource {
    /// Media kind derived from the declared MIME type.
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_mime_type(self.mime_type.as_deref())
    }

    /// MIME base type with parameters stripped and lowercased; blank
    /// declarations count as absent.
    pub fn base_mime_type(&self) -> Option<String> {
        self.mime_type
            .as_deref()
            .map(base_type)
            .filter(|base| !base.is_empty())
    }

    /// Whether this resource carries at least one of the given roles.
    pub fn has_any_role(&self, roles: &[LinkRole]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }
}

/// Facts about one digital-library record, as supplied by the record
/// accessor. An immutable snapshot; the engine retains nothing across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    /// Declared EDM type; absent when the record declares none, several, or
    /// an unrecognized value.
    #[serde(default, deserialize_with = "lenient_edm_type")]
    pub edm_type: Option<EdmType>,
    #[serde(default)]
    pub has_thumbnails: bool,
    #[serde(default)]
    pub has_landing_page: bool,
    /// Record-level license.
    #[serde(default)]
    pub license: Option<LicenseCategory>,
    #[serde(default)]
    pub resources: Vec<MediaResource>,
}

impl Record {
    /// Resources carrying at least one of the given roles.
    pub fn resources_with_roles(&self, roles: &[LinkRole]) -> Vec<&MediaResource> {
        self.resources
            .iter()
            .filter(|resource| resource.has_any_role(roles))
            .collect()
    }

    /// Distinct about-URLs of resources carrying at least one of the given
    /// roles.
    pub fn urls_with_roles(&self, roles: &[LinkRole]) -> BTreeSet<&str> {
        self.resources
            .iter()
            .filter(|resource| resource.has_any_role(roles))
            .map(|resource| resource.about.as_str())
            .collect()
    }
}

/// Unrecognized declared types degrade to absent instead of failing the
/// whole record document.
fn lenient_edm_type<'de, D>(deserializer: D) -> Result<Option<EdmType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(EdmType::from_declared))
}
