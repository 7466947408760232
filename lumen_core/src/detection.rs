//! Detection results and the event record callers may persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::LumenError;
use crate::severity::{Severity, SeverityTier};

/// A single keyword hit, rendered as `TIER: "phrase"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Indicator {
    pub tier: SeverityTier,
    pub phrase: String,
}

impl Indicator {
    #[must_use]
    pub fn new(tier: SeverityTier, phrase: impl Into<String>) -> Self {
        Self {
            tier,
            phrase: phrase.into(),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.tier.label(), self.phrase)
    }
}

impl FromStr for Indicator {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LumenError::InvalidIndicator(s.to_string());
        let (label, quoted) = s.split_once(": ").ok_or_else(invalid)?;
        let tier = SeverityTier::from_label(label).ok_or_else(invalid)?;
        let phrase = quoted
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or_else(invalid)?;
        Ok(Self::new(tier, phrase))
    }
}

impl Serialize for Indicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Indicator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of a keyword scan with at least one severity hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub severity: Severity,
    /// First matching type in table order, if any.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Every matched phrase, severe entries first.
    pub indicators: Vec<Indicator>,
}

impl DetectionResult {
    /// Indicators rendered as strings, in discovery order.
    #[must_use]
    pub fn indicator_lines(&self) -> Vec<String> {
        self.indicators.iter().map(ToString::to_string).collect()
    }

    /// Number of indicators found at a given tier.
    #[must_use]
    pub fn count_at(&self, tier: SeverityTier) -> usize {
        self.indicators.iter().filter(|i| i.tier == tier).count()
    }

    /// The type, or an empty string when none matched.
    #[must_use]
    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}

const EXCERPT_CHARS: usize = 120;

/// Record of a positive detection, built by the caller when it wants to
/// persist or forward a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionEvent {
    pub id: Uuid,
    pub detector: String,
    pub input_excerpt: String,
    pub result: DetectionResult,
    pub detected_at: DateTime<Utc>,
}

impl DetectionEvent {
    #[must_use]
    pub fn new(detector: impl Into<String>, input: &str, result: DetectionResult) -> Self {
        Self {
            id: Uuid::now_v7(),
            detector: detector.into(),
            input_excerpt: excerpt(input),
            result,
            detected_at: Utc::now(),
        }
    }
}

fn excerpt(input: &str) -> String {
    if input.chars().count() <= EXCERPT_CHARS {
        input.to_string()
    } else {
        let cut: String = input.chars().take(EXCERPT_CHARS - 3).collect();
        format!("{cut}...")
    }
}
