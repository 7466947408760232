//! Integration tests for cultural adaptation.
//!
//! These tests verify that:
//! - Any tradition string adapts without panicking
//! - Substitution leaves no known placeholder behind for any registered profile
//! - Profiles registered at runtime are visible to concurrent readers
//! - Profiles can be loaded from JSON

use std::sync::Arc;
use std::thread;

use lumen_culture::{
    AdaptationContext, CulturalAdapter, CulturalProfile, EmotionalState, PLACEHOLDERS,
    ProfileRegistry, unresolved_placeholders,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FULL_TEMPLATE: &str = "Call on {deity}. Picture {protectionSymbol} glowing {lightColor}. \
     Recite {prayer}, remembering {culturalReference}. Again: {deity}, {culturalReference}.";

fn profile(tradition: &str, deity: &str) -> CulturalProfile {
    CulturalProfile {
        tradition: tradition.to_string(),
        deity: deity.to_string(),
        protection_symbol: "a ring of fire".to_string(),
        light_color: "amber".to_string(),
        prayer: "the hearth blessing".to_string(),
        color_scheme: "amber and black".to_string(),
        cultural_references: vec!["the eternal flame".to_string()],
    }
}

#[test]
fn test_any_tradition_adapts() {
    let adapter = CulturalAdapter::new();
    let traditions = [
        "",
        " ",
        "BUDDHIST",
        "unknown-tradition",
        "{deity}",
        "ñandutí",
        "christian\n",
    ];
    for tradition in traditions {
        for state in ["crisis", "distressed", "calm", "whatever"] {
            for content in ["protection", "healing", "cleansing", "guidance", ""] {
                let context = AdaptationContext::new(
                    tradition,
                    EmotionalState::from_str_lowercase(state),
                    content,
                );
                let text = adapter.adapt_content(FULL_TEMPLATE, &context);
                assert!(!text.is_empty());
            }
        }
    }
}

#[test]
fn test_substitution_is_exhaustive_for_every_profile() {
    let adapter = CulturalAdapter::new();
    adapter
        .add_custom_profile("hearth", profile("hearth", "Hestia"))
        .expect("valid profile should register");

    let mut rng = StdRng::seed_from_u64(11);
    for id in adapter.registry().ids() {
        for content in ["protection", "healing", "guidance"] {
            let context = AdaptationContext::new(id.as_str(), EmotionalState::Neutral, content);
            let result = adapter.adapt_with_rng(FULL_TEMPLATE, &context, &mut rng);
            assert_eq!(result.profile, id);
            assert!(
                unresolved_placeholders(&result.text).is_empty(),
                "{id}/{content}: {}",
                result.text
            );
            for token in PLACEHOLDERS {
                assert!(!result.text.contains(token));
            }
        }
    }
}

#[test]
fn test_fallback_is_reported() {
    let adapter = CulturalAdapter::new();
    let mut rng = StdRng::seed_from_u64(5);

    let known = adapter.adapt_with_rng(
        "{deity}",
        &AdaptationContext::new("jewish", EmotionalState::Neutral, "guidance"),
        &mut rng,
    );
    assert!(!known.fallback_used);
    assert_eq!(known.text, "Hashem");

    let unknown = adapter.adapt_with_rng(
        "{deity}",
        &AdaptationContext::new("zoroastrian", EmotionalState::Neutral, "guidance"),
        &mut rng,
    );
    assert!(unknown.fallback_used);
    assert_eq!(unknown.profile, "secular");
    assert_eq!(unknown.text, "the Universe");
}

#[test]
fn test_custom_default_profile() {
    let registry = ProfileRegistry::new();
    registry
        .register("hearth", profile("hearth", "Hestia"))
        .expect("valid profile should register");
    let registry = registry
        .with_default("hearth")
        .expect("hearth was just registered");

    let adapter = CulturalAdapter::with_registry(registry);
    let text = adapter.adapt_content(
        "{deity} keep me",
        &AdaptationContext::new("nobody-knows", EmotionalState::Neutral, "guidance"),
    );
    assert_eq!(text, "Hestia keep me");
}

#[test]
fn test_concurrent_registration_and_reads() {
    let adapter = Arc::new(CulturalAdapter::new());

    thread::scope(|scope| {
        for n in 0..4 {
            let adapter = Arc::clone(&adapter);
            scope.spawn(move || {
                let id = format!("custom-{n}");
                adapter
                    .add_custom_profile(&id, profile(&id, &format!("Spirit {n}")))
                    .expect("valid profile should register");
            });
        }
        for _ in 0..4 {
            let adapter = Arc::clone(&adapter);
            scope.spawn(move || {
                let text = adapter.adapt_content(
                    "{deity}",
                    &AdaptationContext::new("buddhist", EmotionalState::Calm, "guidance"),
                );
                assert_eq!(text, "White Tara");
            });
        }
    });

    for n in 0..4 {
        let text = adapter.adapt_content(
            "{deity}",
            &AdaptationContext::new(format!("custom-{n}"), EmotionalState::Neutral, "guidance"),
        );
        assert_eq!(text, format!("Spirit {n}"));
    }
}

#[test]
fn test_profile_from_json() {
    let json = r#"{
        "tradition": "norse",
        "deity": "Odin",
        "protection_symbol": "the Helm of Awe",
        "light_color": "storm-grey",
        "prayer": "the Havamal",
        "color_scheme": "grey and blue",
        "cultural_references": ["Yggdrasil", "Eir"]
    }"#;
    let parsed: CulturalProfile = serde_json::from_str(json).expect("valid JSON should deserialize");

    let adapter = CulturalAdapter::new();
    adapter
        .add_custom_profile("norse", parsed)
        .expect("valid profile should register");

    let text = adapter.adapt_content(
        "{culturalReference} restores you",
        &AdaptationContext::new("norse", EmotionalState::Neutral, "healing"),
    );
    assert_eq!(text, "Eir restores you");
}
