//! Keyword severity detection.
//!
//! Scans free text against a [`KeywordSet`]: every tiered phrase contained in
//! the lowercased input becomes an indicator, severity is the highest tier
//! seen, and the type is the first type rule (in declaration order) with a
//! matching phrase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::keywords::KeywordSet;
use lumen_core::{DetectionResult, Feature, Indicator, Severity, SeverityTier};

/// The stock detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    #[default]
    Entity,
    Marriage,
}

impl DetectorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Marriage => "marriage",
        }
    }

    #[must_use]
    pub fn stock_keywords(self) -> KeywordSet {
        match self {
            Self::Entity => KeywordSet::entity_attachment(),
            Self::Marriage => KeywordSet::spiritual_marriage(),
        }
    }

    /// The subscription feature that gates this detector.
    #[must_use]
    pub const fn feature(self) -> Feature {
        match self {
            Self::Entity => Feature::EntityDetection,
            Self::Marriage => Feature::MarriageDetection,
        }
    }
}

impl FromStr for DetectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entity" => Ok(Self::Entity),
            "marriage" => Ok(Self::Marriage),
            other => Err(format!("unknown detector: {other}")),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a keyword detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub keywords: KeywordSet,

    /// Inputs with fewer characters than this are never scanned.
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,
}

const fn default_min_input_chars() -> usize {
    3
}

impl DetectorConfig {
    #[must_use]
    pub const fn new(keywords: KeywordSet) -> Self {
        Self {
            keywords,
            min_input_chars: default_min_input_chars(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new(KeywordSet::entity_attachment())
    }
}

/// Stateless keyword severity classifier.
#[derive(Debug, Clone)]
pub struct KeywordDetector {
    keywords: KeywordSet,
    min_input_chars: usize,
}

impl KeywordDetector {
    #[must_use]
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            keywords: config.keywords.normalized(),
            min_input_chars: config.min_input_chars,
        }
    }

    /// Detector over one of the stock tables.
    #[must_use]
    pub fn stock(kind: DetectorKind) -> Self {
        Self::new(DetectorConfig::new(kind.stock_keywords()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.keywords.name
    }

    #[must_use]
    pub const fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Scan `input`. `None` means no severity signal, including inputs too
    /// short to scan; a type match alone is not reported.
    #[must_use]
    pub fn detect(&self, input: &str) -> Option<DetectionResult> {
        if input.chars().count() < self.min_input_chars {
            return None;
        }

        let lower = input.to_lowercase();

        let mut severity = Severity::None;
        let mut indicators = Vec::new();
        for tier in SeverityTier::SCAN_ORDER {
            for phrase in self.keywords.keywords.phrases(tier) {
                if lower.contains(phrase.as_str()) {
                    indicators.push(Indicator::new(tier, phrase.clone()));
                    severity = severity.raise(tier);
                }
            }
        }

        if severity.is_none() {
            return None;
        }

        let kind = self.classify_lowercase(&lower);

        debug!(
            "{} detector: severity={} type={:?} indicators={}",
            self.keywords.name,
            severity.value(),
            kind,
            indicators.len()
        );

        Some(DetectionResult {
            severity,
            kind,
            indicators,
        })
    }

    /// First type rule with a phrase in `input`, regardless of severity.
    #[must_use]
    pub fn classify(&self, input: &str) -> Option<String> {
        self.classify_lowercase(&input.to_lowercase())
    }

    fn classify_lowercase(&self, lower: &str) -> Option<String> {
        self.keywords
            .types
            .iter()
            .find(|rule| rule.matches(lower))
            .map(|rule| rule.id.clone())
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::stock(DetectorKind::Entity)
    }
}
