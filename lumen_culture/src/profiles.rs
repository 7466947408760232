//! Cultural profiles and the registry that serves them.
//!
//! The registry is seeded with the stock traditions and can take additional
//! profiles at runtime. Lookups never fail: an unknown tradition resolves to
//! the default profile and says so.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

use crate::error::{CultureError, Result};
use crate::placeholder::PLACEHOLDERS;
use lumen_core::CulturalProfile;

/// Tradition used when a lookup misses.
pub const DEFAULT_TRADITION: &str = "secular";

fn profile(
    tradition: &str,
    deity: &str,
    protection_symbol: &str,
    light_color: &str,
    prayer: &str,
    color_scheme: &str,
    references: &[&str],
) -> CulturalProfile {
    CulturalProfile {
        tradition: tradition.to_string(),
        deity: deity.to_string(),
        protection_symbol: protection_symbol.to_string(),
        light_color: light_color.to_string(),
        prayer: prayer.to_string(),
        color_scheme: color_scheme.to_string(),
        cultural_references: references.iter().map(|r| (*r).to_string()).collect(),
    }
}

/// Built-in traditions.
#[must_use]
pub fn stock_profiles() -> Vec<CulturalProfile> {
    vec![
        profile(
            "christian",
            "Jesus",
            "the Cross",
            "white",
            "the Lord's Prayer",
            "white and gold",
            &["Psalm 91", "the healing of the blind man", "the Holy Spirit"],
        ),
        profile(
            "buddhist",
            "White Tara",
            "the Dharma Wheel",
            "golden",
            "Om Mani Padme Hum",
            "saffron and maroon",
            &["the Heart Sutra", "the Medicine Buddha", "the Bodhi tree"],
        ),
        profile(
            "hindu",
            "Lord Ganesha",
            "the Om symbol",
            "saffron",
            "the Gayatri Mantra",
            "saffron and red",
            &["the Hanuman Chalisa", "Dhanvantari", "the Bhagavad Gita"],
        ),
        profile(
            "islamic",
            "Allah",
            "Ayat al-Kursi",
            "green",
            "Al-Fatiha",
            "green and white",
            &["Surah Al-Falaq", "Surah Ash-Shifa verses", "the Night Journey"],
        ),
        profile(
            "jewish",
            "Hashem",
            "the Star of David",
            "blue",
            "the Shema",
            "blue and white",
            &["the Priestly Blessing", "the Mi Shebeirach", "the Psalms of David"],
        ),
        profile(
            "pagan",
            "the Goddess",
            "the pentacle",
            "silver",
            "the Wiccan Rede",
            "green and silver",
            &["the circle of salt", "the healing herbs", "the Wheel of the Year"],
        ),
        profile(
            "indigenous",
            "the Great Spirit",
            "the medicine wheel",
            "earth-toned",
            "a prayer to the four directions",
            "earth and sky",
            &["sage smudging", "the sweat lodge", "the ancestors"],
        ),
        secular_profile(),
    ]
}

/// Normalise a tradition identifier for lookup and registration.
#[must_use]
pub fn normalize_tradition(id: &str) -> String {
    id.trim().to_lowercase()
}

/// Rejects profiles that would leave placeholders behind after substitution.
pub fn validate_profile(id: &str, profile: &CulturalProfile) -> Result<()> {
    if id.is_empty() {
        return Err(CultureError::EmptyTradition);
    }
    if profile.deity.trim().is_empty() {
        return Err(CultureError::MissingDeity(id.to_string()));
    }
    for field in profile.text_fields() {
        if let Some(token) = PLACEHOLDERS.into_iter().find(|t| field.contains(t)) {
            return Err(CultureError::PlaceholderInProfile {
                tradition: id.to_string(),
                token,
            });
        }
        // a brace could pair with template text into a fresh token
        if field.contains(['{', '}']) {
            return Err(CultureError::BraceInProfile {
                tradition: id.to_string(),
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/// Outcome of a profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub id: String,
    pub profile: CulturalProfile,
    pub fallback_used: bool,
}

/// Thread-safe tradition → profile map with a designated default.
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: RwLock<HashMap<String, CulturalProfile>>,
    default_id: String,
}

impl ProfileRegistry {
    /// Registry holding the stock profiles, defaulting to `secular`.
    #[must_use]
    pub fn new() -> Self {
        let profiles = stock_profiles()
            .into_iter()
            .map(|p| (p.tradition.clone(), p))
            .collect();
        Self {
            profiles: RwLock::new(profiles),
            default_id: DEFAULT_TRADITION.to_string(),
        }
    }

    /// Switch the fallback tradition. It must already be registered.
    pub fn with_default(mut self, tradition: &str) -> Result<Self> {
        let id = normalize_tradition(tradition);
        if !self.contains(&id) {
            return Err(CultureError::UnknownDefault(id));
        }
        self.default_id = id;
        Ok(self)
    }

    #[must_use]
    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    #[must_use]
    pub fn contains(&self, tradition: &str) -> bool {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&normalize_tradition(tradition))
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn get(&self, tradition: &str) -> Option<CulturalProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&normalize_tradition(tradition))
            .cloned()
    }

    /// Look up `tradition`, falling back to the default profile.
    ///
    /// Never fails. A poisoned lock is read through, since profiles are only
    /// ever inserted whole.
    #[must_use]
    pub fn resolve(&self, tradition: &str) -> ResolvedProfile {
        let guard = self.profiles.read().unwrap_or_else(|poisoned| {
            warn!("Profile registry lock poisoned, reading through");
            poisoned.into_inner()
        });

        let id = normalize_tradition(tradition);
        if let Some(profile) = guard.get(&id) {
            return ResolvedProfile {
                id,
                profile: profile.clone(),
                fallback_used: false,
            };
        }

        let (id, profile) = guard.get(&self.default_id).map_or_else(
            || {
                warn!("Default tradition '{}' missing, using secular", self.default_id);
                (DEFAULT_TRADITION.to_string(), secular_profile())
            },
            |p| (self.default_id.clone(), p.clone()),
        );
        ResolvedProfile {
            id,
            profile,
            fallback_used: true,
        }
    }

    /// Register or replace a profile. Returns the profile it replaced.
    pub fn register(
        &self,
        tradition: &str,
        profile: CulturalProfile,
    ) -> Result<Option<CulturalProfile>> {
        let id = normalize_tradition(tradition);
        validate_profile(&id, &profile)?;

        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| CultureError::LockPoisoned)?;
        let previous = profiles.insert(id.clone(), profile);
        info!(
            "Registered cultural profile: {id}{}",
            if previous.is_some() { " (replaced)" } else { "" }
        );
        Ok(previous)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn secular_profile() -> CulturalProfile {
    profile(
        DEFAULT_TRADITION,
        "the Universe",
        "a shield of light",
        "bright white",
        "a grounding affirmation",
        "soft blue and white",
        &["a protective visualization", "mindful breathing", "nature"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> CulturalProfile {
        profile(
            "norse",
            "Odin",
            "Aegishjalmur",
            "storm-grey",
            "a call to the Allfather",
            "grey and blue",
            &["Yggdrasil", "Eir"],
        )
    }

    #[test]
    fn test_stock_profiles_are_valid() {
        for p in stock_profiles() {
            assert!(validate_profile(&p.tradition, &p).is_ok(), "{}", p.tradition);
            assert!(p.cultural_references.len() >= 2, "{}", p.tradition);
        }
    }

    #[test]
    fn test_default_tradition_is_stock() {
        assert!(
            stock_profiles()
                .iter()
                .any(|p| p.tradition == DEFAULT_TRADITION)
        );
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = ProfileRegistry::new();

        let hit = registry.resolve("  Buddhist ");
        assert_eq!(hit.id, "buddhist");
        assert!(!hit.fallback_used);
        assert_eq!(hit.profile.deity, "White Tara");

        for miss in ["", "jedi", "{deity}"] {
            let resolved = registry.resolve(miss);
            assert!(resolved.fallback_used);
            assert_eq!(resolved.id, DEFAULT_TRADITION);
        }
    }

    #[test]
    fn test_register_and_replace() {
        let registry = ProfileRegistry::new();
        assert!(!registry.contains("norse"));

        let first = registry.register("Norse", custom());
        assert!(matches!(first, Ok(None)));
        assert!(registry.contains("norse"));
        assert_eq!(registry.resolve("norse").profile.deity, "Odin");

        let mut changed = custom();
        changed.deity = "Freya".to_string();
        let second = registry.register("norse", changed);
        assert!(matches!(second, Ok(Some(ref old)) if old.deity == "Odin"));
        assert_eq!(registry.resolve("norse").profile.deity, "Freya");
    }

    #[test]
    fn test_register_rejects_bad_profiles() {
        let registry = ProfileRegistry::new();

        assert!(matches!(
            registry.register("   ", custom()),
            Err(CultureError::EmptyTradition)
        ));

        let mut no_deity = custom();
        no_deity.deity = " ".to_string();
        assert!(matches!(
            registry.register("norse", no_deity),
            Err(CultureError::MissingDeity(_))
        ));

        let mut recursive = custom();
        recursive.prayer = "pray to {deity}".to_string();
        assert!(matches!(
            registry.register("norse", recursive),
            Err(CultureError::PlaceholderInProfile { token: "{deity}", .. })
        ));

        let mut partial = custom();
        partial.cultural_references = vec!["{deit".to_string()];
        assert!(matches!(
            registry.register("norse", partial),
            Err(CultureError::BraceInProfile { .. })
        ));
        assert!(!registry.contains("norse"));
    }

    #[test]
    fn test_with_default() {
        let registry = ProfileRegistry::new().with_default("Christian");
        let Ok(registry) = registry else {
            panic!("christian is a stock tradition");
        };
        assert_eq!(registry.default_id(), "christian");
        assert_eq!(registry.resolve("unknown").profile.deity, "Jesus");

        assert!(matches!(
            ProfileRegistry::new().with_default("atlantean"),
            Err(CultureError::UnknownDefault(_))
        ));
    }

    #[test]
    fn test_ids_sorted() {
        let ids = ProfileRegistry::new().ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), stock_profiles().len());
    }
}
