use mediatier_core::models::{MediaKind, MediaResource, Record, ResolutionTierMetadata, Tier};

use crate::classifier::MediaClassifier;
use crate::resolution;

/// Classifier for records whose declared type is text.
///
/// PDFs count as directly displayable full text and take the top tier.
/// Embedded page scans (image resources on a text record) rate on their
/// resolution, with a landing page guaranteeing at least tier 1. Embeddable
/// media has no effect on text records.
pub struct TextClassifier;

impl MediaClassifier for TextClassifier {
    fn pre_classify(&self, _record: &Record) -> Option<Tier> {
        None
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
        _has_embeddable_media: bool,
    ) -> Tier {
        let landing_page_tier = if has_landing_page { Tier::T1 } else { Tier::T0 };
        match resource.media_kind() {
            MediaKind::Text if is_pdf(resource) => Tier::T4,
            MediaKind::Image => resolution::image_resolution_tier(resource.pixel_count.unwrap_or(0))
                .max(landing_page_tier),
            _ => landing_page_tier,
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
        MediaKind::Text
    }
}

fn is_pdf(resource: &MediaResource) -> bool {
    resource
        .base_mime_type()
        .is_some_and(|base| base.starts_with("application/pdf"))
}
