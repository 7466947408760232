use lumen_core::{AdaptationContext, ContentType, EmotionalState, Feature};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Input parameters for the Adapt command strategy.
#[derive(Debug, Clone)]
pub struct AdaptInput {
    pub template: String,
    /// Overrides `user.tradition`
    pub tradition: Option<String>,
    /// Overrides `user.emotional_state`
    pub state: Option<String>,
    pub content_type: String,
    /// Fixed seed for the random cultural reference
    pub seed: Option<u64>,
}

/// Strategy for adapting a template to the user's tradition.
#[derive(Debug, Clone, Copy)]
pub struct AdaptStrategy;

impl super::CommandStrategy for AdaptStrategy {
    type Input = AdaptInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_for(Feature::CulturalAdaptation)?;
        let adapter = config.build_adapter()?;

        let context = AdaptationContext {
            tradition: input
                .tradition
                .unwrap_or_else(|| config.user.tradition.clone()),
            emotional_state: input
                .state
                .as_deref()
                .map_or(config.user.emotional_state, EmotionalState::from_str_lowercase),
            content_type: ContentType::from(input.content_type),
        };
        debug!("Adaptation context: {context:?}");

        let mut rng = input
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let adaptation = adapter.adapt_with_rng(&input.template, &context, &mut rng);

        if adaptation.fallback_used {
            info!(
                "Tradition '{}' not registered, used '{}'",
                context.tradition, adaptation.profile
            );
        }

        println!("{}", adaptation.text);
        Ok(())
    }
}
