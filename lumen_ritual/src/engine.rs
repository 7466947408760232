//! Environmental ritual suggestion engine.

use tracing::debug;

use crate::environment::Environment;
use crate::rules::{RitualRule, RitualSuggestion, default_rules, grounding_ritual};

/// Matches an [`Environment`] against a rule table.
#[derive(Debug, Clone)]
pub struct RitualEngine {
    rules: Vec<RitualRule>,
}

impl RitualEngine {
    #[must_use]
    pub const fn new(rules: Vec<RitualRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_rules())
    }

    #[must_use]
    pub fn rules(&self) -> &[RitualRule] {
        &self.rules
    }

    /// Append a rule. Ties keep declaration order, so it ranks after
    /// existing rules of the same priority.
    pub fn add_rule(&mut self, rule: RitualRule) {
        self.rules.push(rule);
    }

    /// Every matching suggestion, highest priority first. Never empty: the
    /// grounding ritual is returned when nothing matches.
    #[must_use]
    pub fn suggest(&self, env: &Environment) -> Vec<RitualSuggestion> {
        let mut matched: Vec<&RitualRule> = self.rules.iter().filter(|r| r.matches(env)).collect();
        // stable sort keeps declaration order for equal priorities
        matched.sort_by_key(|r| std::cmp::Reverse(r.priority));

        debug!(
            "Ritual rules matched for {} / {:?}: {:?}",
            env.time_of_day,
            env.weather,
            matched.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
        );

        if matched.is_empty() {
            return vec![grounding_ritual()];
        }
        matched.into_iter().map(|r| r.suggestion.clone()).collect()
    }

    /// The single best suggestion.
    #[must_use]
    pub fn best(&self, env: &Environment) -> RitualSuggestion {
        self.suggest(env)
            .into_iter()
            .next()
            .unwrap_or_else(grounding_ritual)
    }
}

impl Default for RitualEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Season, TimeOfDay};

    #[test]
    fn test_rainy_evening() {
        let engine = RitualEngine::with_defaults();
        let env = Environment::new(TimeOfDay::Evening).with_weather("heavy rain");
        let titles: Vec<_> = engine.suggest(&env).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Rain Cleansing", "Evening Release"]);
    }

    #[test]
    fn test_thunderstorm_outranks_rain() {
        let engine = RitualEngine::with_defaults();
        let env = Environment::new(TimeOfDay::Night).with_weather("Thunderstorm with rain");
        let suggestions = engine.suggest(&env);
        assert_eq!(suggestions[0].title, "Storm Shielding");
        assert_eq!(suggestions[1].title, "Rain Cleansing");
        assert_eq!(engine.best(&env).title, "Storm Shielding");
    }

    #[test]
    fn test_seasonal_rules_join_in() {
        let engine = RitualEngine::with_defaults();
        let env = Environment::new(TimeOfDay::Night).with_season(Season::Autumn);
        let titles: Vec<_> = engine.suggest(&env).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Night Protection", "Ancestor Remembrance"]);
    }

    #[test]
    fn test_empty_table_returns_grounding() {
        let engine = RitualEngine::new(Vec::new());
        let env = Environment::new(TimeOfDay::Morning);
        assert_eq!(engine.suggest(&env), vec![grounding_ritual()]);
        assert_eq!(engine.best(&env), grounding_ritual());
    }

    #[test]
    fn test_equal_priority_keeps_declaration_order() {
        let mut engine = RitualEngine::new(Vec::new());
        for title in ["first", "second"] {
            engine.add_rule(RitualRule {
                id: title.to_string(),
                times: Vec::new(),
                weather_keywords: Vec::new(),
                seasons: Vec::new(),
                priority: 10,
                suggestion: RitualSuggestion {
                    title: title.to_string(),
                    description: String::new(),
                    duration_minutes: 1,
                    elements: Vec::new(),
                },
            });
        }
        let titles: Vec<_> = engine
            .suggest(&Environment::new(TimeOfDay::Dawn))
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["first", "second"]);
    }
}
