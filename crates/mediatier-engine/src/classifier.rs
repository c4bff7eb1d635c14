//! Per-media-type classifier template
//!
//! Classification happens both for the record as a whole and on individual
//! media resources. Implementations supply the per-type rules through the
//! trait hooks; the shared driver in [`MediaClassifier::classify`] runs the
//! short-circuit, collects qualifying resources, applies license correction
//! and reduces to the record tier.

use tracing::debug;

use mediatier_core::models::{
    LicenseCategory, LinkRole, MediaKind, MediaResource, Record, RecordReport,
    ResolutionTierMetadata, ResourceReport, Tier,
};

use crate::embeddable;

/// Roles that qualify a media resource for tier classification.
pub const CLASSIFIABLE_ROLES: [LinkRole; 2] = [LinkRole::IsShownBy, LinkRole::HasView];

/// Classifier for one media type.
pub trait MediaClassifier {
    /// Try to classify the record from record-level facts alone, without
    /// looking at individual media resources. `None` defers to the
    /// resource-level rules.
    fn pre_classify(&self, record: &Record) -> Option<Tier>;

    /// Classify a record that has no media resource with a qualifying role.
    fn classify_without_resources(&self, record: &Record, has_landing_page: bool) -> Tier;

    /// Classify one media resource on its media facts only, ignoring
    /// licenses: the result is the highest tier the resource could get
    /// under any license.
    fn classify_resource(
        &self,
        resource: &MediaResource,
        has_landing_page: bool,
        has_embeddable_media: bool,
    ) -> Tier;

    /// Resolution facts to attach to the resource's report, computed from
    /// the tier before license correction.
    fn resolution_metadata(
        &self,
        resource: &MediaResource,
        tier_before_correction: Tier,
    ) -> ResolutionTierMetadata;

    /// The media kind this classifier covers.
    fn media_kind(&self) -> MediaKind;

    /// Classify a record and produce its full tier report.
    fn classify(&self, record: &Record) -> RecordReport {
        // The record-level facts may settle the tier on their own.
        if let Some(tier) = self.pre_classify(record) {
            debug!(kind = %self.media_kind(), %tier, "record classified without inspecting resources");
            return RecordReport::without_breakdown(tier);
        }

        let resources = record.resources_with_roles(&CLASSIFIABLE_ROLES);
        let has_landing_page = record.has_landing_page;
        let has_embeddable_media = embeddable::has_embeddable_media(record);
        let entity_license = record.license;

        let (tier, reports) = if resources.is_empty() {
            let tier = self.classify_without_resources(record, has_landing_page);
            (tier, Vec::new())
        } else {
            let mut reports: Vec<ResourceReport> = resources
                .into_iter()
                .map(|resource| {
                    classify_and_correct(
                        self,
                        resource,
                        entity_license,
                        has_landing_page,
                        has_embeddable_media,
                    )
                })
                .collect();
            // Highest corrected tier first; the record takes the top entry.
            reports.sort_by(|a, b| b.tier.cmp(&a.tier));
            let tier = reports.first().map(|report| report.tier).unwrap_or(Tier::T0);
            (tier, reports)
        };

        debug!(kind = %self.media_kind(), %tier, resources = reports.len(), "record classified");
        RecordReport {
            tier,
            media_kind: Some(self.media_kind()),
            license: entity_license,
            has_thumbnails: record.has_thumbnails,
            has_landing_page,
            has_embeddable_media,
            resources: reports,
        }
    }
}

/// Classify one resource and lower the raw tier to the effective license
/// ceiling.
fn classify_and_correct<C>(
    classifier: &C,
    resource: &MediaResource,
    entity_license: Option<LicenseCategory>,
    has_landing_page: bool,
    has_embeddable_media: bool,
) -> ResourceReport
where
    C: MediaClassifier + ?Sized,
{
    let tier_before_correction =
        classifier.classify_resource(resource, has_landing_page, has_embeddable_media);
    let license = LicenseCategory::effective(resource.license, entity_license);
    let tier = tier_before_correction.min(license.ceiling());
    let resolution = classifier.resolution_metadata(resource, tier_before_correction);

    ResourceReport {
        resource_url: resource.about.clone(),
        media_kind: resource.media_kind(),
        mime_type: resource.base_mime_type(),
        link_roles: resource.roles.clone(),
        license,
        tier,
        tier_before_license_correction: tier_before_correction,
        resolution,
    }
}
