//! Severity tiers used to style progress indicators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display severity of a progress or health indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Nominal,
    Warning,
    Critical,
}

impl SeverityTier {
    /// Short marker for terminal output
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Nominal => "OK",
            Self::Warning => "!",
            Self::Critical => "!!",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal => write!(f, "nominal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}
