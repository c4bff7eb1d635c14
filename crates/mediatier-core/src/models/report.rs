use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::ReportError;

use super::{LicenseCategory, LinkRole, MediaKind, Tier};

/// Resolution facet of a resource report: an image pixel-count tier or a
/// video vertical-resolution tier, never both. Resolution values of exactly
/// zero are normalized to absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionTierMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    image_resolution: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_resolution_tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertical_resolution: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertical_resolution_tier: Option<Tier>,
}

impl ResolutionTierMetadata {
    /// No resolution information (audio, 3D and other non-visual resources).
    pub fn none() -> ResolutionTierMetadata {
        ResolutionTierMetadata::default()
    }

    /// Image resolution facts.
    pub fn image(pixel_count: Option<u64>, tier: Tier) -> ResolutionTierMetadata {
        ResolutionTierMetadata {
            image_resolution: normalize(pixel_count),
            image_resolution_tier: Some(tier),
            ..ResolutionTierMetadata::default()
        }
    }

    /// Vertical (video) resolution facts.
    pub fn vertical(height: Option<u64>, tier: Tier) -> ResolutionTierMetadata {
        ResolutionTierMetadata {
            vertical_resolution: normalize(height),
            vertical_resolution_tier: Some(tier),
            ..ResolutionTierMetadata::default()
        }
    }

    /// Validating constructor for externally assembled values. Rejects the
    /// combination of an image and a vertical resolution tier; the failure
    /// is local to this one report.
    pub fn new(
        image_resolution: Option<u64>,
        image_resolution_tier: Option<Tier>,
        vertical_resolution: Option<u64>,
        vertical_resolution_tier: Option<Tier>,
    ) -> Result<ResolutionTierMetadata, ReportError> {
        if image_resolution_tier.is_some() && vertical_resolution_tier.is_some() {
            return Err(ReportError::ConflictingResolutionTiers);
        }
        Ok(ResolutionTierMetadata {
            image_resolution: normalize(image_resolution),
            image_resolution_tier,
            vertical_resolution: normalize(vertical_resolution),
            vertical_resolution_tier,
        })
    }

    pub fn image_resolution(&self) -> Option<u64> {
        self.image_resolution
    }

    pub fn image_resolution_tier(&self) -> Option<Tier> {
        self.image_resolution_tier
    }

    pub fn vertical_resolution(&self) -> Option<u64> {
        self.vertical_resolution
    }

    pub fn vertical_resolution_tier(&self) -> Option<Tier> {
        self.vertical_resolution_tier
    }
}

fn normalize(resolution: Option<u64>) -> Option<u64> {
    resolution.filter(|value| *value > 0)
}

/// Technical-metadata breakdown for one classified media resource.
/// Constructed once per qualifying resource, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceReport {
    pub resource_url: String,
    pub media_kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub link_roles: BTreeSet<LinkRole>,
    /// Effective license applied during correction.
    pub license: LicenseCategory,
    /// Tier after license correction.
    pub tier: Tier,
    pub tier_before_license_correction: Tier,
    #[serde(flatten)]
    pub resolution: ResolutionTierMetadata,
}

/// Full content-tier classification of one record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    pub tier: Tier,
    /// Media kind of the classifier that ran; absent when classification
    /// short-circuited before selecting one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_kind: Option<MediaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseCategory>,
    pub has_thumbnails: bool,
    pub has_landing_page: bool,
    pub has_embeddable_media: bool,
    /// Per-resource breakdown, ordered by descending corrected tier.
    pub resources: Vec<ResourceReport>,
}

impl RecordReport {
    /// Report for a record classified from record-level facts alone, with
    /// an empty breakdown.
    pub fn without_breakdown(tier: Tier) -> RecordReport {
        RecordReport {
            tier,
            media_kind: None,
            license: None,
            has_thumbnails: false,
            has_landing_page: false,
            has_embeddable_media: false,
            resources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_two_resolution_tiers() {
        let result =
            ResolutionTierMetadata::new(Some(1000), Some(Tier::T1), Some(480), Some(Tier::T4));
        assert!(matches!(
            result,
            Err(ReportError::ConflictingResolutionTiers)
        ));
    }

    #[test]
    fn test_new_accepts_either_tier_alone() {
        let image = ResolutionTierMetadata::new(Some(1000), Some(Tier::T1), None, None).unwrap();
        assert_eq!(image.image_resolution_tier(), Some(Tier::T1));
        assert_eq!(image.vertical_resolution_tier(), None);

        let vertical = ResolutionTierMetadata::new(None, None, Some(480), Some(Tier::T4)).unwrap();
        assert_eq!(vertical.vertical_resolution(), Some(480));
        assert_eq!(vertical.image_resolution(), None);
    }

    #[test]
    fn test_zero_resolution_is_absent() {
        let metadata = ResolutionTierMetadata::image(Some(0), Tier::T0);
        assert_eq!(metadata.image_resolution(), None);
        assert_eq!(metadata.image_resolution_tier(), Some(Tier::T0));

        let metadata = ResolutionTierMetadata::vertical(Some(0), Tier::T0);
        assert_eq!(metadata.vertical_resolution(), None);
    }

    #[test]
    fn test_none_serializes_without_resolution_fields() {
        let json = serde_json::to_value(ResolutionTierMetadata::none()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_without_breakdown_is_empty() {
        let report = RecordReport::without_breakdown(Tier::T0);
        assert_eq!(report.tier, Tier::T0);
        assert_eq!(report.media_kind, None);
        assert!(report.resources.is_empty());
        assert!(!report.has_embeddable_media);
    }
}
