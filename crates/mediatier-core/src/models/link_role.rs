use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Structural relationship between a media resource and its record.
///
/// A resource may carry several roles at once; only `IsShownBy` and
/// `HasView` qualify a resource for tier classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkRole {
    Object,
    IsShownBy,
    IsShownAt,
    HasView,
    SeeAlso,
}

impl Display for LinkRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LinkRole::Object => write!(f, "object"),
            LinkRole::IsShownBy => write!(f, "isShownBy"),
            LinkRole::IsShownAt => write!(f, "isShownAt"),
            LinkRole::HasView => write!(f, "hasView"),
            LinkRole::SeeAlso => write!(f, "seeAlso"),
        }
    }
}
