use mediatier_core::models::{
    LinkRole, MediaKind, MediaResource, Record, ResolutionTierMetadata, Tier,
};

use crate::classifier::MediaClassifier;
use crate::resolution;

/// Classifier for records whose declared type is video.
///
/// High-resolution video earns the top tier outright; anything lower rates
/// on embeddable media and the landing page.
pub struct VideoClassifier;

impl MediaClassifier for VideoClassifier {
    fn pre_classify(&self, record: &Record) -> Option<Tier> {
        if !record.has_thumbnails {
            return Some(Tier::T0);
        }
        // Deferring to the resource rules also requires a sizeable preview
        // image among the record's object resources.
        let has_large_object_image = record
            .resources_with_roles(&[LinkRole::Object])
            .into_iter()
            .any(|resource| {
                resource.media_kind() == MediaKind::Image
                    && resource.pixel_count.unwrap_or(0) >= resolution::SMALL_IMAGE_PIXELS
            });
        if has_large_object_image {
            None
        } else {
            Some(Tier::T0)
        }
    }

    fn classify_without_resources(&self, _record: &Record, has_landing_page: bool) -> Tier {
        if has_landing_page {
            Tier::T1
        } else {
            Tier::T0
        }
    }

    fn classify_resource(
        &self,
        resource: &MediaResource,
        has_landing_page: bool,
        has_embeddable_media: bool,
    ) -> Tier {
        let is_high_quality = resource.media_kind() == MediaKind::Video
            && resolution::is_high_quality_video(resource.height.unwrap_or(0));
        if is_high_quality || has_embeddable_media {
            Tier::T4
        } else if has_landing_page {
            Tier::T1
        } else {
            Tier::T0
        }
    }

    fn resolution_metadata(
        &self,
        resource: &MediaResource,
        tier_before_correction: Tier,
    ) -> ResolutionTierMetadata {
        if resource.media_kind() == MediaKind::Video {
            ResolutionTierMetadata::vertical(resource.height, tier_before_correction)
        } else {
            ResolutionTierMetadata::none()
        }
    }

    fn media_kind(&self) -> MediaKind {
        MediaKind::Video
    }
}
