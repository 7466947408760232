//! Severity levels reported by keyword detectors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LumenError;

/// A keyword tier. Each tier owns one keyword list in a detector table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Severe,
}

impl SeverityTier {
    /// Scan order used by detectors: most severe first.
    pub const SCAN_ORDER: [Self; 3] = [Self::Severe, Self::Moderate, Self::Mild];

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }

    /// Uppercase label used in indicator strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "MILD",
            Self::Moderate => "MODERATE",
            Self::Severe => "SEVERE",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "MILD" => Some(Self::Mild),
            "MODERATE" => Some(Self::Moderate),
            "SEVERE" => Some(Self::Severe),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall severity of a detection, 0-3. Serialised as the integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    #[default]
    None = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

impl Severity {
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Running max used while scanning tiers.
    #[must_use]
    pub fn raise(self, tier: SeverityTier) -> Self {
        self.max(Self::from(tier))
    }
}

impl From<SeverityTier> for Severity {
    fn from(tier: SeverityTier) -> Self {
        match tier {
            SeverityTier::Mild => Self::Mild,
            SeverityTier::Moderate => Self::Moderate,
            SeverityTier::Severe => Self::Severe,
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.value()
    }
}

impl TryFrom<u8> for Severity {
    type Error = LumenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Mild),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Severe),
            other => Err(LumenError::InvalidSeverity(other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        };
        write!(f, "{} ({name})", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranks() {
        assert_eq!(SeverityTier::Mild.rank(), 1);
        assert_eq!(SeverityTier::Moderate.rank(), 2);
        assert_eq!(SeverityTier::Severe.rank(), 3);
    }

    #[test]
    fn test_raise_is_max_not_sum() {
        let severity = Severity::None
            .raise(SeverityTier::Severe)
            .raise(SeverityTier::Mild)
            .raise(SeverityTier::Moderate);
        assert_eq!(severity, Severity::Severe);

        let severity = Severity::None
            .raise(SeverityTier::Mild)
            .raise(SeverityTier::Mild);
        assert_eq!(severity, Severity::Mild);
    }

    #[test]
    fn test_label_round_trip() {
        for tier in SeverityTier::SCAN_ORDER {
            assert_eq!(SeverityTier::from_label(tier.label()), Some(tier));
        }
        assert_eq!(SeverityTier::from_label("mild"), None);
    }

    #[test]
    fn test_severity_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Severity::Moderate).ok().as_deref(), Some("2"));
        assert!(serde_json::from_str::<Severity>("4").is_err());
        assert_eq!(Severity::try_from(3).ok(), Some(Severity::Severe));
    }
}
