use mediatier_core::models::{MediaKind, MediaResource, Record, ResolutionTierMetadata, Tier};

use crate::classifier::MediaClassifier;

/// Classifier for records whose declared type is 3D.
///
/// Any resource with a declared MIME type earns the top tier; landing pages
/// and embeddable media are ignored.
pub struct ThreeDClassifier;

impl MediaClassifier for ThreeDClassifier {
    fn pre_classify(&self, record: &Record) -> Option<Tier> {
        // Without thumbnails the record cannot rise above tier 0.
        (!record.has_thumbnails).then_some(Tier::T0)
    }

    fn classify_without_resources(&self, _record: &Record, _has_landing_page: bool) -> Tier {
        Tier::T0
    }

    fn classify_resource(
        &self,
        resource: &MediaResource,
        _has_landing_page: bool,
        _has_embeddable_media: bool,
    ) -> Tier {
        if resource.base_mime_type().is_some() {
            Tier::T4
        } else {
            Tier::T0
        }
    }

    fn resolution_metadata(
        &self,
        _resource: &MediaResource,
        _tier_before_correction: Tier,
    ) -> ResolutionTierMetadata {
        ResolutionTierMetadata::none()
    }

    fn media_kind(&self) -> MediaKind {
        MediaKind::ThreeD
    }
}
