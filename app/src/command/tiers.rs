use lumen_config::Config;
use lumen_core::{Feature, SubscriptionTier};

/// Input for the tiers command.
pub struct TiersInput {
    pub feature: Option<Feature>,
}

/// Strategy for listing subscription tiers and what they unlock.
#[derive(Debug, Clone, Copy)]
pub struct TiersStrategy;

impl super::CommandStrategy for TiersStrategy {
    type Input = TiersInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let current = Config::load_or_default().subscription.tier;

        if let Some(feature) = input.feature {
            let required = feature.required_tier();
            let status = if current.allows(feature) {
                "unlocked"
            } else {
                "locked"
            };
            println!("{feature}: requires {required} ({status} on {current})");
            return Ok(());
        }

        for tier in SubscriptionTier::ALL {
            let marker = if tier == current { " (current)" } else { "" };
            println!("{}{marker}", tier.as_str().to_uppercase());

            let mentor = tier
                .mentor_daily_messages()
                .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
            println!("  AI mentor messages/day: {mentor}");

            let features: Vec<&str> = tier.features().iter().map(Feature::as_str).collect();
            println!("  Features: {}", features.join(", "));
            println!();
        }
        Ok(())
    }
}
