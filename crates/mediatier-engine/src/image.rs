use mediatier_core::models::{MediaKind, MediaResource, Record, ResolutionTierMetadata, Tier};

use crate::classifier::MediaClassifier;
use crate::resolution;

/// Classifier for records whose declared type is image.
///
/// Image resources rate purely on pixel count; landing pages and embeddable
/// media cannot compensate for a missing or non-image resource.
pub struct ImageClassifier;

impl MediaClassifier for ImageClassifier {
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
        match resource.media_kind() {
            MediaKind::Image => {
                resolution::image_resolution_tier(resource.pixel_count.unwrap_or(0))
            }
            _ => Tier::T0,
        }
    }

    fn resolution_metadata(
        &self,
        resource: &MediaResource,
        tier_before_correction: Tier,
    ) -> ResolutionTierMetadata {
        if resource.media_kind() == MediaKind::Image {
            ResolutionTierMetadata::image(resource.pixel_count, tier_before_correction)
        } else {
            ResolutionTierMetadata::none()
        }
    }

    fn media_kind(&self) -> MediaKind {
        MediaKind::Image
    }
}
