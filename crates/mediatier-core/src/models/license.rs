use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Tier;

/// License category attached to a record or to an individual media resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseCategory {
    Open,
    Restricted,
    Closed,
}

impl LicenseCategory {
    /// The maximum tier this license permits, regardless of technical
    /// quality.
    pub fn ceiling(self) -> Tier {
        match self {
            LicenseCategory::Open => Tier::T4,
            LicenseCategory::Restricted => Tier::T3,
            LicenseCategory::Closed => Tier::T0,
        }
    }

    /// Effective license for one resource: the resource's own license wins
    /// over the record-level one, and a record with no license information
    /// anywhere counts as closed.
    pub fn effective(
        resource: Option<LicenseCategory>,
        entity: Option<LicenseCategory>,
    ) -> LicenseCategory {
        resource.or(entity).unwrap_or(LicenseCategory::Closed)
    }
}

impl Display for LicenseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LicenseCategory::Open => write!(f, "open"),
            LicenseCategory::Restricted => write!(f, "restricted"),
            LicenseCategory::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_table() {
        assert_eq!(LicenseCategory::Open.ceiling(), Tier::T4);
        assert_eq!(LicenseCategory::Restricted.ceiling(), Tier::T3);
        assert_eq!(LicenseCategory::Closed.ceiling(), Tier::T0);
    }

    #[test]
    fn test_effective_prefers_resource_license() {
        assert_eq!(
            LicenseCategory::effective(
                Some(LicenseCategory::Closed),
                Some(LicenseCategory::Open)
            ),
            LicenseCategory::Closed
        );
    }

    #[test]
    fn test_effective_falls_back_to_entity_license() {
        assert_eq!(
            LicenseCategory::effective(None, Some(LicenseCategory::Restricted)),
            LicenseCategory::Restricted
        );
    }

    #[test]
    fn test_effective_defaults_to_closed() {
        assert_eq!(
            LicenseCategory::effective(None, None),
            LicenseCategory::Closed
        );
    }
}
