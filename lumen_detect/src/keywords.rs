//! Keyword tables for the stock detectors.
//!
//! A [`KeywordSet`] is plain data: three tiered phrase lists plus an ordered
//! list of type rules. The same engine runs every set, so a new detector is a
//! new table, not new code. Sets are serde types and can be replaced from
//! configuration.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::detector::{DetectorConfig, KeywordDetector};
use lumen_core::SeverityTier;

/// Phrase lists per severity tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    #[serde(default)]
    pub severe: Vec<String>,
    #[serde(default)]
    pub moderate: Vec<String>,
    #[serde(default)]
    pub mild: Vec<String>,
}

impl KeywordTable {
    #[must_use]
    pub fn phrases(&self, tier: SeverityTier) -> &[String] {
        match tier {
            SeverityTier::Severe => &self.severe,
            SeverityTier::Moderate => &self.moderate,
            SeverityTier::Mild => &self.mild,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.severe.len() + self.moderate.len() + self.mild.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lowercased(&self) -> Self {
        Self {
            severe: lowercase_all(&self.severe),
            moderate: lowercase_all(&self.moderate),
            mild: lowercase_all(&self.mild),
        }
    }
}

/// A type identifier and the phrases that classify input as that type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRule {
    pub id: String,
    pub keywords: Vec<String>,
}

impl TypeRule {
    #[must_use]
    pub fn new(id: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// True if any keyword occurs in already-lowercased input.
    #[must_use]
    pub fn matches(&self, lower_input: &str) -> bool {
        self.keywords.iter().any(|k| lower_input.contains(k.as_str()))
    }
}

/// Everything a detector needs to know about one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub name: String,
    pub keywords: KeywordTable,
    /// Declaration order decides classification: first match wins.
    #[serde(default)]
    pub types: Vec<TypeRule>,
}

impl KeywordSet {
    /// Copy with every phrase lowercased, so matching is a plain `contains`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.clone(),
            keywords: self.keywords.lowercased(),
            types: self
                .types
                .iter()
                .map(|t| TypeRule {
                    id: t.id.clone(),
                    keywords: lowercase_all(&t.keywords),
                })
                .collect(),
        }
    }

    /// Entity attachment indicators.
    #[must_use]
    pub fn entity_attachment() -> Self {
        Self {
            name: "entity".to_string(),
            keywords: KeywordTable {
                severe: strings(&[
                    "demonic attachment",
                    "multiple entities",
                    "possessed",
                    "possession",
                    "voices commanding",
                    "losing time",
                    "blackouts",
                    "urges to harm",
                    "something controlling me",
                ]),
                moderate: strings(&[
                    "presence",
                    "being watched",
                    "nightmares",
                    "sleep paralysis",
                    "shadow figure",
                    "cold spots",
                    "hearing whispers",
                    "mood swings",
                    "not myself",
                ]),
                mild: strings(&[
                    "drained",
                    "exhausted",
                    "heavy energy",
                    "brain fog",
                    "unexplained sadness",
                    "fatigue",
                    "feel off",
                ]),
            },
            types: vec![
                TypeRule::new(
                    "demonic_attachment",
                    &["demonic", "demon", "evil presence", "possessed", "possession"],
                ),
                TypeRule::new(
                    "multiple_entities",
                    &["multiple entities", "many spirits", "several presences"],
                ),
                TypeRule::new(
                    "parasitic_entity",
                    &["drained", "exhausted", "energy vampire", "feeding on", "fatigue"],
                ),
                TypeRule::new(
                    "ancestral_spirit",
                    &["ancestor", "grandmother", "grandfather", "family spirit"],
                ),
                TypeRule::new(
                    "thought_form",
                    &["intrusive thoughts", "thought form", "negative loop"],
                ),
            ],
        }
    }

    /// Spiritual marriage (spirit spouse) indicators.
    #[must_use]
    pub fn spiritual_marriage() -> Self {
        Self {
            name: "marriage".to_string(),
            keywords: KeywordTable {
                severe: strings(&[
                    "spirit spouse",
                    "spirit husband",
                    "spirit wife",
                    "married in the spirit",
                    "nightly visitations",
                    "blocked from marriage",
                ]),
                moderate: strings(&[
                    "sexual dreams",
                    "dream lover",
                    "wedding in a dream",
                    "jealous spirit",
                    "relationships keep failing",
                ]),
                mild: strings(&[
                    "lonely",
                    "relationship problems",
                    "dreams of a stranger",
                    "ring in a dream",
                    "watched at night",
                ]),
            },
            types: vec![
                TypeRule::new("spirit_husband", &["spirit husband", "incubus", "male spirit"]),
                TypeRule::new("spirit_wife", &["spirit wife", "succubus", "female spirit"]),
                TypeRule::new(
                    "marine_spirit",
                    &["water spirit", "mermaid", "marine", "river", "ocean"],
                ),
                TypeRule::new(
                    "ancestral_covenant",
                    &["family curse", "ancestral", "dedicated as a child", "covenant"],
                ),
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Blank phrases are dropped: every input contains the empty string.
fn lowercase_all(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

static ENTITY_DETECTOR: Lazy<KeywordDetector> =
    Lazy::new(|| KeywordDetector::new(DetectorConfig::new(KeywordSet::entity_attachment())));

static MARRIAGE_DETECTOR: Lazy<KeywordDetector> =
    Lazy::new(|| KeywordDetector::new(DetectorConfig::new(KeywordSet::spiritual_marriage())));

/// Shared detector over the stock entity attachment table.
#[must_use]
pub fn entity_detector() -> &'static KeywordDetector {
    &ENTITY_DETECTOR
}

/// Shared detector over the stock spiritual marriage table.
#[must_use]
pub fn marriage_detector() -> &'static KeywordDetector {
    &MARRIAGE_DETECTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lowercase(set: &KeywordSet) -> bool {
        SeverityTier::SCAN_ORDER
            .iter()
            .flat_map(|t| set.keywords.phrases(*t))
            .chain(set.types.iter().flat_map(|t| t.keywords.iter()))
            .all(|p| *p == p.to_lowercase())
    }

    #[test]
    fn test_stock_tables_are_lowercase() {
        assert!(all_lowercase(&KeywordSet::entity_attachment()));
        assert!(all_lowercase(&KeywordSet::spiritual_marriage()));
    }

    #[test]
    fn test_stock_type_order() {
        let ids: Vec<_> = KeywordSet::entity_attachment()
            .types
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(
            ids,
            [
                "demonic_attachment",
                "multiple_entities",
                "parasitic_entity",
                "ancestral_spirit",
                "thought_form"
            ]
        );
    }

    #[test]
    fn test_normalized_lowercases_custom_tables() {
        let set = KeywordSet {
            name: "custom".to_string(),
            keywords: KeywordTable {
                severe: vec!["Dark Cloud".to_string()],
                ..KeywordTable::default()
            },
            types: vec![TypeRule::new("Storm", &["THUNDER"])],
        };
        let normalized = set.normalized();
        assert_eq!(normalized.keywords.severe, ["dark cloud"]);
        assert_eq!(normalized.types[0].keywords, ["thunder"]);
        // ids are identifiers, not phrases
        assert_eq!(normalized.types[0].id, "Storm");
    }

    #[test]
    fn test_normalized_drops_blank_phrases() {
        let set = KeywordSet {
            name: "custom".to_string(),
            keywords: KeywordTable {
                severe: vec!["Storm".to_string(), String::new()],
                mild: vec!["   ".to_string()],
                ..KeywordTable::default()
            },
            types: vec![TypeRule::new("anything", &["", "\t"]), TypeRule::new("storm", &["storm"])],
        };
        let normalized = set.normalized();
        assert_eq!(normalized.keywords.severe, ["storm"]);
        assert!(normalized.keywords.mild.is_empty());
        assert!(normalized.types[0].keywords.is_empty());
        assert!(!normalized.types[0].matches("any input at all"));
        assert!(normalized.types[1].matches("a storm is coming"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_keyword_set_serialization() {
        let set = KeywordSet::spiritual_marriage();
        let json = serde_json::to_string(&set).expect("set should serialize");
        let back: KeywordSet = serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(back, set);
    }

    #[test]
    fn test_table_len() {
        let table = KeywordSet::entity_attachment().keywords;
        assert_eq!(table.len(), 25);
        assert!(!table.is_empty());
        assert!(KeywordTable::default().is_empty());
    }
}
