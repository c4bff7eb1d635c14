use mediatier_core::models::{MediaKind, MediaResource, Record, ResolutionTierMetadata, Tier};

use crate::classifier::MediaClassifier;

/// Classifier for records whose declared type is sound.
///
/// Any actual audio resource earns the top tier; for anything else the
/// record falls back to what its landing page or embeddable media offer.
pub struct AudioClassifier;

impl MediaClassifier for AudioClassifier {
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
        has_embeddable_media: bool,
    ) -> Tier {
        if resource.media_kind() == MediaKind::Audio || has_embeddable_media {
            Tier::T4
        } else if has_landing_page {
            Tier::T1
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
        MediaKind::Audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(mime_type: Option<&str>) -> MediaResource {
        MediaResource {
            about: "http://example.org/media/1".to_string(),
            mime_type: mime_type.map(str::to_string),
            pixel_count: None,
            height: None,
            license: None,
            roles: Default::default(),
        }
    }

    #[test]
    fn test_audio_resource_is_top_tier() {
        let r = resource(Some("audio/mpeg"));
        assert_eq!(AudioClassifier.classify_resource(&r, false, false), Tier::T4);
        assert_eq!(AudioClassifier.classify_resource(&r, true, true), Tier::T4);
    }

    #[test]
    fn test_non_audio_resource_rates_by_flags() {
        let r = resource(Some("application/octet-stream"));
        assert_eq!(AudioClassifier.classify_resource(&r, false, false), Tier::T0);
        assert_eq!(AudioClassifier.classify_resource(&r, true, false), Tier::T1);
        assert_eq!(AudioClassifier.classify_resource(&r, false, true), Tier::T4);
        assert_eq!(AudioClassifier.classify_resource(&r, true, true), Tier::T4);
    }

    #[test]
    fn test_unknown_mime_rates_by_flags() {
        let r = resource(None);
        assert_eq!(AudioClassifier.classify_resource(&r, false, false), Tier::T0);
        assert_eq!(AudioClassifier.classify_resource(&r, true, false), Tier::T1);
    }

    #[test]
    fn test_no_resolution_metadata() {
        let r = resource(Some("audio/mpeg"));
        assert_eq!(
            AudioClassifier.resolution_metadata(&r, Tier::T4),
            ResolutionTierMetadata::none()
        );
    }

    #[test]
    fn test_fallback_without_resources() {
        let record = Record::default();
        assert_eq!(
            AudioClassifier.classify_without_resources(&record, false),
            Tier::T0
        );
        assert_eq!(
            AudioClassifier.classify_without_resources(&record, true),
            Tier::T1
        );
    }

    #[test]
    fn test_never_pre_classifies() {
        assert_eq!(AudioClassifier.pre_classify(&Record::default()), None);
    }
}
