//! Classifier dispatch
//!
//! Routes a record to the classifier matching its declared EDM type.

use tracing::debug;

use mediatier_core::models::{EdmType, Record, RecordReport, Tier};

use crate::audio::AudioClassifier;
use crate::classifier::MediaClassifier;
use crate::image::ImageClassifier;
use crate::text::TextClassifier;
use crate::three_d::ThreeDClassifier;
use crate::video::VideoClassifier;

/// Classify a record into its content tier.
///
/// Records with an absent or unrecognized declared type get tier 0 with an
/// empty breakdown, without further inspection. Never fails: absence of
/// data degrades the tier instead.
pub fn classify(record: &Record) -> RecordReport {
    match record.edm_type {
        Some(EdmType::Sound) => AudioClassifier.classify(record),
        Some(EdmType::Image) => ImageClassifier.classify(record),
        Some(EdmType::Text) => TextClassifier.classify(record),
        Some(EdmType::Video) => VideoClassifier.classify(record),
        Some(EdmType::ThreeD) => ThreeDClassifier.classify(record),
        None => {
            debug!("record declares no recognized edm type, assigning tier 0");
            RecordReport::without_breakdown(Tier::T0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediatier_core::models::{LicenseCategory, LinkRole, MediaKind, MediaResource};

    #[test]
    fn test_absent_edm_type_is_tier_zero() {
        let report = classify(&Record::default());
        assert_eq!(report.tier, Tier::T0);
        assert_eq!(report.media_kind, None);
        assert!(report.resources.is_empty());
    }

    #[test]
    fn test_absent_edm_type_skips_resource_inspection() {
        // Even a record full of top-tier media stays at tier 0 when its
        // declared type is unusable.
        let record = Record {
            has_thumbnails: true,
            has_landing_page: true,
            license: Some(LicenseCategory::Open),
            resources: vec![MediaResource {
                about: "http://example.org/media/1".to_string(),
                mime_type: Some("audio/mpeg".to_string()),
                pixel_count: None,
                height: None,
                license: None,
                roles: [LinkRole::IsShownBy].into_iter().collect(),
            }],
            ..Record::default()
        };
        let report = classify(&record);
        assert_eq!(report.tier, Tier::T0);
        assert!(report.resources.is_empty());
        assert!(!report.has_landing_page);
    }

    #[test]
    fn test_dispatch_selects_by_edm_type() {
        let record = Record {
            edm_type: Some(EdmType::Sound),
            resources: vec![MediaResource {
                about: "http://example.org/media/1".to_string(),
                mime_type: Some("audio/mpeg".to_string()),
                pixel_count: None,
                height: None,
                license: Some(LicenseCategory::Open),
                roles: [LinkRole::IsShownBy].into_iter().collect(),
            }],
            ..Record::default()
        };
        let report = classify(&record);
        assert_eq!(report.media_kind, Some(MediaKind::Audio));
        assert_eq!(report.tier, Tier::T4);
    }
}
