//! Error types module
//!
//! Classification itself is total: every combination of present and absent
//! facts maps to a tier. The only failure recognized here is a contract
//! violation while assembling a report from externally supplied parts.

/// Contract violations raised while assembling classification reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("resolution metadata cannot carry both an image and a vertical resolution tier")]
    ConflictingResolutionTiers,
}
