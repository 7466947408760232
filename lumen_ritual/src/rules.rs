//! Ritual rule table.

use serde::{Deserialize, Serialize};

use crate::environment::{Environment, Season, TimeOfDay};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualSuggestion {
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub elements: Vec<String>,
}

/// A suggestion and the conditions under which it applies.
///
/// Every condition list is a disjunction; an empty list accepts anything.
/// A weather condition never matches when no weather is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualRule {
    pub id: String,
    #[serde(default)]
    pub times: Vec<TimeOfDay>,
    /// Case-insensitive substrings of the weather description.
    #[serde(default)]
    pub weather_keywords: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub priority: i32,
    pub suggestion: RitualSuggestion,
}

impl RitualRule {
    #[must_use]
    pub fn matches(&self, env: &Environment) -> bool {
        let time_ok = self.times.is_empty() || self.times.contains(&env.time_of_day);

        let season_ok = self.seasons.is_empty()
            || env.season.is_some_and(|season| self.seasons.contains(&season));

        let weather_ok = self.weather_keywords.is_empty()
            || env.weather.as_deref().is_some_and(|weather| {
                let lower = weather.to_lowercase();
                self.weather_keywords
                    .iter()
                    .any(|k| lower.contains(&k.to_lowercase()))
            });

        time_ok && season_ok && weather_ok
    }
}

fn suggestion(title: &str, description: &str, minutes: u32, elements: &[&str]) -> RitualSuggestion {
    RitualSuggestion {
        title: title.to_string(),
        description: description.to_string(),
        duration_minutes: minutes,
        elements: elements.iter().map(|e| (*e).to_string()).collect(),
    }
}

fn rule(
    id: &str,
    times: &[TimeOfDay],
    weather: &[&str],
    seasons: &[Season],
    priority: i32,
    suggestion: RitualSuggestion,
) -> RitualRule {
    RitualRule {
        id: id.to_string(),
        times: times.to_vec(),
        weather_keywords: weather.iter().map(|w| (*w).to_string()).collect(),
        seasons: seasons.to_vec(),
        priority,
        suggestion,
    }
}

/// Returned when no rule matches.
#[must_use]
pub fn grounding_ritual() -> RitualSuggestion {
    suggestion(
        "Grounding Breath",
        "Sit with both feet on the floor and take ten slow breaths, imagining roots reaching into the earth.",
        5,
        &["breath", "earth"],
    )
}

/// Stock rule table.
#[must_use]
pub fn default_rules() -> Vec<RitualRule> {
    use Season::{Autumn, Spring, Summer, Winter};
    use TimeOfDay::{Afternoon, Dawn, Evening, Morning, Night};

    vec![
        rule(
            "storm_shielding",
            &[],
            &["storm", "thunder", "lightning"],
            &[],
            90,
            suggestion(
                "Storm Shielding",
                "Visualize a sphere of light around your home while the storm discharges stagnant energy.",
                15,
                &["candle", "visualization"],
            ),
        ),
        rule(
            "rain_cleansing",
            &[],
            &["rain", "drizzle", "shower"],
            &[],
            70,
            suggestion(
                "Rain Cleansing",
                "Listen to the rain and let each drop carry away a worry; collect rainwater for later cleansing work.",
                20,
                &["water", "bowl"],
            ),
        ),
        rule(
            "full_sun_charging",
            &[Morning, Afternoon],
            &["sunny", "clear", "sun"],
            &[],
            60,
            suggestion(
                "Solar Charging",
                "Place crystals in direct sunlight and stand with palms open to absorb warmth and vitality.",
                10,
                &["crystals", "sunlight"],
            ),
        ),
        rule(
            "snow_stillness",
            &[],
            &["snow", "frost"],
            &[Winter],
            65,
            suggestion(
                "Snow Stillness",
                "Sit in silence and match your breath to the stillness of the snow-covered world.",
                15,
                &["silence", "breath"],
            ),
        ),
        rule(
            "fog_introspection",
            &[],
            &["fog", "mist", "haze"],
            &[],
            55,
            suggestion(
                "Veil Meditation",
                "Use the fog as a reminder that clarity comes in time; journal what feels hidden.",
                20,
                &["journal"],
            ),
        ),
        rule(
            "dawn_intention",
            &[Dawn],
            &[],
            &[],
            50,
            suggestion(
                "Dawn Intention",
                "Greet the rising sun and speak one intention for the day aloud.",
                5,
                &["sunrise", "voice"],
            ),
        ),
        rule(
            "morning_energy",
            &[Morning],
            &[],
            &[],
            40,
            suggestion(
                "Morning Energy Activation",
                "Stretch toward the sky, then sweep your hands down the body to clear stale energy.",
                10,
                &["movement"],
            ),
        ),
        rule(
            "afternoon_reset",
            &[Afternoon],
            &[],
            &[],
            30,
            suggestion(
                "Midday Reset",
                "Step away for a short walking meditation, noticing five things you can see and hear.",
                10,
                &["walking"],
            ),
        ),
        rule(
            "evening_release",
            &[Evening],
            &[],
            &[],
            40,
            suggestion(
                "Evening Release",
                "Write down what you are ready to release from the day and safely burn or tear the page.",
                15,
                &["paper", "candle"],
            ),
        ),
        rule(
            "night_protection",
            &[Night],
            &[],
            &[],
            45,
            suggestion(
                "Night Protection",
                "Before sleep, imagine a protective light sealing every door and window of your home.",
                10,
                &["visualization", "salt"],
            ),
        ),
        rule(
            "spring_renewal",
            &[Dawn, Morning],
            &[],
            &[Spring],
            35,
            suggestion(
                "Spring Renewal",
                "Plant a seed or tend a plant while naming something you wish to grow.",
                15,
                &["seed", "soil"],
            ),
        ),
        rule(
            "summer_gratitude",
            &[Evening],
            &[],
            &[Summer],
            35,
            suggestion(
                "Summer Gratitude",
                "Watch the long sunset and list three things the season has given you.",
                10,
                &["sunset", "gratitude"],
            ),
        ),
        rule(
            "autumn_ancestors",
            &[Evening, Night],
            &[],
            &[Autumn],
            35,
            suggestion(
                "Ancestor Remembrance",
                "Light a candle for those who came before and share a memory of them.",
                15,
                &["candle", "photograph"],
            ),
        ),
    ]
}
