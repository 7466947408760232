use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

use lumen_core::{CulturalProfile, EmotionalState, Feature, SubscriptionTier, ensure_access};
use lumen_culture::{CulturalAdapter, DEFAULT_TRADITION, ProfileRegistry};
use lumen_detect::{DetectorConfig, DetectorKind, KeywordDetector, KeywordSet};
use lumen_ritual::{RitualEngine, RitualRule};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub subscription: SubscriptionConfig,
    #[serde(default)]
    pub detectors: DetectorsConfig,
    #[serde(default)]
    pub culture: CultureConfig,
    #[serde(default)]
    pub rituals: RitualConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UserConfig {
    #[serde(default = "UserConfig::default_tradition")]
    pub tradition: String,
    #[serde(default)]
    pub emotional_state: EmotionalState,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            tradition: Self::default_tradition(),
            emotional_state: EmotionalState::default(),
        }
    }
}

impl UserConfig {
    fn default_tradition() -> String {
        DEFAULT_TRADITION.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SubscriptionConfig {
    #[serde(default)]
    pub tier: SubscriptionTier,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DetectorsConfig {
    /// Replaces the stock entity attachment table when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<KeywordSet>,
    /// Replaces the stock spiritual marriage table when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage: Option<KeywordSet>,
    #[serde(default = "DetectorsConfig::default_min_input_chars")]
    pub min_input_chars: usize,
}

impl Default for DetectorsConfig {
    fn default() -> Self {
        Self {
            entity: None,
            marriage: None,
            min_input_chars: Self::default_min_input_chars(),
        }
    }
}

impl DetectorsConfig {
    const fn default_min_input_chars() -> usize {
        3
    }

    fn keywords(&self, kind: DetectorKind) -> KeywordSet {
        let custom = match kind {
            DetectorKind::Entity => self.entity.as_ref(),
            DetectorKind::Marriage => self.marriage.as_ref(),
        };
        custom.cloned().unwrap_or_else(|| kind.stock_keywords())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CultureConfig {
    #[serde(default = "CultureConfig::default_tradition")]
    pub default_tradition: String,
    #[serde(default)]
    pub custom_profiles: BTreeMap<String, CulturalProfile>,
}

impl Default for CultureConfig {
    fn default() -> Self {
        Self {
            default_tradition: Self::default_tradition(),
            custom_profiles: BTreeMap::new(),
        }
    }
}

impl CultureConfig {
    fn default_tradition() -> String {
        DEFAULT_TRADITION.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RitualConfig {
    #[serde(default)]
    pub extra_rules: Vec<RitualRule>,
}

pub const CONFIG_TEMPLATE: &str = r#"{
  "user": {
    "tradition": "secular",
    "emotional_state": "neutral"
  },
  "subscription": {
    "tier": "earth"
  },
  "detectors": {
    "min_input_chars": 3
  },
  "culture": {
    "default_tradition": "secular",
    "custom_profiles": {}
  },
  "rituals": {
    "extra_rules": []
  }
}"#;

impl Config {
    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lumen"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'lumen init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::from_json(&content)
    }

    /// Like [`Config::load`], but a missing or unreadable file yields defaults.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => {
                info!("Loaded config from ~/lumen/config.json");
                config
            }
            Err(e) => {
                warn!("Using default configuration: {e}");
                let config = Self::default();
                let tier = config.subscription.tier;
                let locked: Vec<&str> = tier.locked_features().iter().map(Feature::as_str).collect();
                if !locked.is_empty() {
                    warn!(
                        "Default tier '{tier}' locks: {}. Run 'lumen init' and set subscription.tier",
                        locked.join(", ")
                    );
                }
                config
            }
        }
    }

    /// Check that the configured tier unlocks `feature`, naming the setting to change if not.
    pub fn check_access(&self, feature: Feature) -> anyhow::Result<()> {
        ensure_access(self.subscription.tier, feature).map_err(|e| {
            anyhow::anyhow!(
                "{e}. Set subscription.tier to \"{}\" or higher in ~/lumen/config.json \
                 (create it with 'lumen init')",
                feature.required_tier()
            )
        })
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Set user.tradition to your tradition (christian, buddhist, hindu, ...)");
        println!("   2. Set subscription.tier to your plan (earth, water, fire, ether)");
        println!(
            "      'detect' needs {} or higher, 'adapt' needs {} or higher; the default {} unlocks neither",
            Feature::EntityDetection.required_tier(),
            Feature::CulturalAdaptation.required_tier(),
            SubscriptionTier::default()
        );
        println!("   3. Run 'lumen detect \"<text>\"' or 'lumen adapt \"<template>\"'");
        println!();
        println!("🔧 Configuration options:");
        println!("   - detectors.entity / detectors.marriage: replace the stock keyword tables");
        println!("   - culture.custom_profiles: add traditions by id");
        println!("   - rituals.extra_rules: add ritual suggestions");
        println!();
        Ok(())
    }

    /// Detector for `kind`, using the configured table if one replaces the stock one.
    #[must_use]
    pub fn build_detector(&self, kind: DetectorKind) -> KeywordDetector {
        let mut config = DetectorConfig::new(self.detectors.keywords(kind));
        config.min_input_chars = self.detectors.min_input_chars;
        let detector = KeywordDetector::new(config);
        if detector.keywords().keywords.is_empty() {
            warn!("{kind} detector has no keywords and will never report anything");
        }
        detector
    }

    /// Adapter over the stock profiles plus every configured custom profile.
    pub fn build_adapter(&self) -> anyhow::Result<CulturalAdapter> {
        let registry = ProfileRegistry::new();
        for (id, profile) in &self.culture.custom_profiles {
            registry
                .register(id, profile.clone())
                .map_err(|e| anyhow::anyhow!("Invalid custom profile '{id}': {e}"))?;
        }
        let registry = registry.with_default(&self.culture.default_tradition)?;
        Ok(CulturalAdapter::with_registry(registry))
    }

    #[must_use]
    pub fn build_ritual_engine(&self) -> RitualEngine {
        let mut engine = RitualEngine::with_defaults();
        for rule in &self.rituals.extra_rules {
            engine.add_rule(rule.clone());
        }
        engine
    }
}
