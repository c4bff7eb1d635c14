//! Mediatier Core Library
//!
//! This crate provides the domain models shared across all mediatier
//! components: content tiers, media kinds, license categories, record and
//! media-resource facts, and the tier reports produced by classification.

pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::ReportError;
pub use models::{
    EdmType, LicenseCategory, LinkRole, MediaKind, MediaResource, Record, RecordReport,
    ResolutionTierMetadata, ResourceReport, Tier,
};
