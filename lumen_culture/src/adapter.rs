//! Template adaptation for a reader's tradition and emotional state.
//!
//! Adapting a template runs three fixed steps:
//! 1. substitute placeholders from the resolved profile
//! 2. adjust tone for the emotional state
//! 3. prepend the content-type/tradition prefix, if any

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::Result;
use crate::placeholder::{
    CULTURAL_REFERENCE, DEITY, LIGHT_COLOR, PRAYER, PROTECTION_SYMBOL, replace_placeholders,
    unresolved_placeholders,
};
use crate::prefix::apply_prefix;
use crate::profiles::{ProfileRegistry, ResolvedProfile};
use crate::tone::adjust_tone;
use lumen_core::{AdaptationContext, ContentType, CulturalProfile};

/// Adapted text plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adaptation {
    pub text: String,
    /// Id of the profile that was applied.
    pub profile: String,
    /// The requested tradition was unknown and the default profile was used.
    pub fallback_used: bool,
    pub prefix: Option<&'static str>,
}

/// Cultural adaptation engine over a [`ProfileRegistry`].
#[derive(Debug, Default)]
pub struct CulturalAdapter {
    registry: ProfileRegistry,
}

impl CulturalAdapter {
    /// Adapter over the stock profiles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_registry(registry: ProfileRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Adapt `template` using the thread-local random source.
    #[must_use]
    pub fn adapt_content(&self, template: &str, context: &AdaptationContext) -> String {
        self.adapt_with_rng(template, context, &mut rand::thread_rng())
            .text
    }

    /// Adapt `template`, drawing any random cultural reference from `rng`.
    #[must_use]
    pub fn adapt_with_rng<R: Rng + ?Sized>(
        &self,
        template: &str,
        context: &AdaptationContext,
        rng: &mut R,
    ) -> Adaptation {
        let ResolvedProfile {
            id,
            profile,
            fallback_used,
        } = self.registry.resolve(&context.tradition);

        if fallback_used {
            debug!(
                "Unknown tradition '{}', using '{}' profile",
                context.tradition, id
            );
        }

        let substituted = substitute(template, &profile, &context.content_type, rng);
        let toned = adjust_tone(&substituted, context.emotional_state);
        let (text, prefix) = apply_prefix(&toned, &context.content_type, &id);

        Adaptation {
            text,
            profile: id,
            fallback_used,
            prefix,
        }
    }

    /// Register a profile for the lifetime of this adapter.
    pub fn add_custom_profile(
        &self,
        tradition: &str,
        profile: CulturalProfile,
    ) -> Result<Option<CulturalProfile>> {
        self.registry.register(tradition, profile)
    }
}

/// Protection reads the first reference, healing the second, anything else a
/// random one. Falls back to the deity when the list has no suitable entry.
fn select_reference<R: Rng + ?Sized>(
    profile: &CulturalProfile,
    content_type: &ContentType,
    rng: &mut R,
) -> String {
    let refs = &profile.cultural_references;
    let picked = match content_type {
        ContentType::Protection => refs.first(),
        ContentType::Healing => refs.get(1),
        _ => refs.choose(rng),
    };
    picked.unwrap_or(&profile.deity).clone()
}

fn substitute<R: Rng + ?Sized>(
    template: &str,
    profile: &CulturalProfile,
    content_type: &ContentType,
    rng: &mut R,
) -> String {
    let mut text = template.to_string();
    // Profile fields carry no braces, so each pass consumes at least one brace
    // pair and tokens assembled from template fragments are caught next pass.
    while !unresolved_placeholders(&text).is_empty() {
        let next = replace_placeholders(&text, |token| match token {
            DEITY => profile.deity.clone(),
            PROTECTION_SYMBOL => profile.protection_symbol.clone(),
            LIGHT_COLOR => profile.light_color.clone(),
            PRAYER => profile.prayer.clone(),
            // only draw from the rng when the token is present
            CULTURAL_REFERENCE => select_reference(profile, content_type, rng),
            other => other.to_string(),
        });
        if next == text {
            break;
        }
        text = next;
    }
    text
}
