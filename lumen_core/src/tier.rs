//! Subscription tiers and the features each one unlocks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LumenError, Result};

/// Pricing level, ordered from the free tier upwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Earth,
    Water,
    Fire,
    Ether,
}

impl SubscriptionTier {
    pub const ALL: [Self; 4] = [Self::Earth, Self::Water, Self::Fire, Self::Ether];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Earth => "earth",
            Self::Water => "water",
            Self::Fire => "fire",
            Self::Ether => "ether",
        }
    }

    #[must_use]
    pub fn allows(self, feature: Feature) -> bool {
        self >= feature.required_tier()
    }

    /// Daily AI mentor message allowance. `None` means unlimited.
    #[must_use]
    pub const fn mentor_daily_messages(self) -> Option<u32> {
        match self {
            Self::Earth => Some(0),
            Self::Water => Some(10),
            Self::Fire => Some(50),
            Self::Ether => None,
        }
    }

    /// Features available at this tier, in declaration order.
    #[must_use]
    pub fn features(self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.allows(*f))
            .collect()
    }

    /// Features that need a higher tier than this one.
    #[must_use]
    pub fn locked_features(self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| !self.allows(*f))
            .collect()
    }
}

impl FromStr for SubscriptionTier {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "earth" => Ok(Self::Earth),
            "water" => Ok(Self::Water),
            "fire" => Ok(Self::Fire),
            "ether" => Ok(Self::Ether),
            other => Err(LumenError::UnknownTier(other.to_string())),
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gated application feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    DreamJournal,
    MeditationTracking,
    RitualSuggestions,
    TarotReading,
    EntityDetection,
    CulturalAdaptation,
    MarriageDetection,
    AiMentor,
}

impl Feature {
    pub const ALL: [Self; 8] = [
        Self::DreamJournal,
        Self::MeditationTracking,
        Self::RitualSuggestions,
        Self::TarotReading,
        Self::EntityDetection,
        Self::CulturalAdaptation,
        Self::MarriageDetection,
        Self::AiMentor,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DreamJournal => "dream_journal",
            Self::MeditationTracking => "meditation_tracking",
            Self::RitualSuggestions => "ritual_suggestions",
            Self::TarotReading => "tarot_reading",
            Self::EntityDetection => "entity_detection",
            Self::CulturalAdaptation => "cultural_adaptation",
            Self::MarriageDetection => "marriage_detection",
            Self::AiMentor => "ai_mentor",
        }
    }

    #[must_use]
    pub const fn required_tier(self) -> SubscriptionTier {
        match self {
            Self::DreamJournal | Self::MeditationTracking | Self::RitualSuggestions => {
                SubscriptionTier::Earth
            }
            Self::TarotReading | Self::EntityDetection | Self::AiMentor => SubscriptionTier::Water,
            Self::CulturalAdaptation | Self::MarriageDetection => SubscriptionTier::Fire,
        }
    }
}

impl FromStr for Feature {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or(LumenError::UnknownFeature(wanted))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fails with [`LumenError::FeatureLocked`] when `tier` is below what `feature` needs.
pub fn ensure_access(tier: SubscriptionTier, feature: Feature) -> Result<()> {
    if tier.allows(feature) {
        Ok(())
    } else {
        Err(LumenError::FeatureLocked {
            feature,
            required: feature.required_tier(),
            current: tier,
        })
    }
}
