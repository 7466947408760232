use chrono::{Datelike, Local, Timelike};
use lumen_core::Feature;
use lumen_ritual::{Environment, Season, TimeOfDay};

/// Input parameters for the Ritual command strategy.
#[derive(Debug, Clone)]
pub struct RitualInput {
    pub hour: Option<u32>,
    pub month: Option<u32>,
    pub weather: Option<String>,
}

/// Strategy for suggesting rituals from time, season and weather.
#[derive(Debug, Clone, Copy)]
pub struct RitualStrategy;

impl super::CommandStrategy for RitualStrategy {
    type Input = RitualInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_for(Feature::RitualSuggestions)?;
        let engine = config.build_ritual_engine();

        let now = Local::now();
        let hour = input.hour.unwrap_or_else(|| now.hour());
        let month = input.month.unwrap_or_else(|| now.month());
        if hour > 23 {
            anyhow::bail!("Hour must be between 0 and 23, got {hour}");
        }

        let env = Environment {
            time_of_day: TimeOfDay::from_hour(hour),
            weather: input.weather,
            season: Season::from_month(month),
        };

        println!(
            "Rituals for {} ({}){}:",
            env.time_of_day,
            env.season.map_or("unknown season", |s| s.as_str()),
            env.weather
                .as_deref()
                .map(|w| format!(", {w}"))
                .unwrap_or_default()
        );
        for suggestion in engine.suggest(&env) {
            println!();
            println!(
                "✨ {} ({} min)",
                suggestion.title, suggestion.duration_minutes
            );
            println!("   {}", suggestion.description);
            if !suggestion.elements.is_empty() {
                println!("   Elements: {}", suggestion.elements.join(", "));
            }
        }
        Ok(())
    }
}
