use lumen_config::Config;
use lumen_core::EmotionalState;
use lumen_culture::tone::replacements;
use lumen_detect::DetectorKind;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and user defaults
/// - Subscription tier
/// - Detector tables in use
/// - Registered cultural profiles and tone rules
/// - Ritual rule count
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== lumen Configuration ===\n");

        println!("Config File: {}", Config::config_path()?.display());
        println!();

        println!("User:");
        println!("  Tradition: {}", config.user.tradition);
        println!("  Emotional State: {}", config.user.emotional_state);
        println!();

        println!("Subscription:");
        println!("  Tier: {}", config.subscription.tier);
        println!();

        println!("Detectors:");
        println!("  Min Input Chars: {}", config.detectors.min_input_chars);
        for kind in [DetectorKind::Entity, DetectorKind::Marriage] {
            let detector = config.build_detector(kind);
            let keywords = detector.keywords();
            let custom = match kind {
                DetectorKind::Entity => config.detectors.entity.is_some(),
                DetectorKind::Marriage => config.detectors.marriage.is_some(),
            };
            let source = if custom { "custom" } else { "stock" };
            println!(
                "  {kind}: {} keywords, {} types ({source})",
                keywords.keywords.len(),
                keywords.types.len()
            );
        }
        println!();

        info!("Building cultural profile registry");
        println!("Culture:");
        match config.build_adapter() {
            Ok(adapter) => {
                println!("  Default Tradition: {}", adapter.registry().default_id());
                println!("  Profiles: {}", adapter.registry().ids().join(", "));
            }
            Err(e) => {
                println!("  Status: Invalid");
                println!("  Error: {e}");
            }
        }
        println!("  Tone Rules:");
        for state in [
            EmotionalState::Crisis,
            EmotionalState::Distressed,
            EmotionalState::Calm,
        ] {
            let pairs: Vec<String> = replacements(state)
                .iter()
                .map(|(from, to)| format!("{from} -> {to}"))
                .collect();
            println!("    {state}: {}", pairs.join(", "));
        }
        println!();

        println!("Rituals:");
        println!("  Rules: {}", config.build_ritual_engine().rules().len());
        println!("  Custom Rules: {}", config.rituals.extra_rules.len());

        Ok(())
    }
}
