//! Word-level tone adjustment keyed by emotional state.
//!
//! Each state owns one ordered list of whole-word replacements. Matching is
//! case-insensitive; a capitalised match gets a capitalised replacement.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use lumen_core::EmotionalState;

/// Soft wording becomes directive.
const CRISIS: &[(&str, &str)] = &[
    ("gently", "immediately"),
    ("slowly", "right away"),
    ("when you are ready", "right now"),
    ("consider", "please"),
    ("might", "should"),
];

/// Urgent wording becomes calming.
const DISTRESSED: &[(&str, &str)] = &[
    ("immediately", "gently"),
    ("urgent", "important"),
    ("right now", "when you are ready"),
    ("quickly", "slowly"),
    ("must", "can"),
];

/// Urgent wording becomes peaceful.
const CALM: &[(&str, &str)] = &[
    ("urgent", "peaceful"),
    ("immediately", "mindfully"),
    ("quickly", "calmly"),
    ("danger", "challenge"),
];

struct ToneRule {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(table: &[(&str, &'static str)]) -> Vec<ToneRule> {
    table
        .iter()
        .filter_map(|(word, replacement)| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).ok()?;
            Some(ToneRule {
                pattern,
                replacement,
            })
        })
        .collect()
}

static CRISIS_RULES: Lazy<Vec<ToneRule>> = Lazy::new(|| compile(CRISIS));
static DISTRESSED_RULES: Lazy<Vec<ToneRule>> = Lazy::new(|| compile(DISTRESSED));
static CALM_RULES: Lazy<Vec<ToneRule>> = Lazy::new(|| compile(CALM));

fn rules_for(state: EmotionalState) -> &'static [ToneRule] {
    match state {
        EmotionalState::Crisis => CRISIS_RULES.as_slice(),
        EmotionalState::Distressed => DISTRESSED_RULES.as_slice(),
        EmotionalState::Calm => CALM_RULES.as_slice(),
        EmotionalState::Neutral => &[],
    }
}

/// The raw replacement table for a state, for display.
#[must_use]
pub const fn replacements(state: EmotionalState) -> &'static [(&'static str, &'static str)] {
    match state {
        EmotionalState::Crisis => CRISIS,
        EmotionalState::Distressed => DISTRESSED,
        EmotionalState::Calm => CALM,
        EmotionalState::Neutral => &[],
    }
}

fn match_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Apply the replacements for `state` to `text`, in table order.
#[must_use]
pub fn adjust_tone(text: &str, state: EmotionalState) -> String {
    let mut adjusted = text.to_string();
    for rule in rules_for(state) {
        adjusted = rule
            .pattern
            .replace_all(&adjusted, |caps: &Captures<'_>| {
                match_case(&caps[0], rule.replacement)
            })
            .into_owned();
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_compiles() {
        for state in [
            EmotionalState::Crisis,
            EmotionalState::Distressed,
            EmotionalState::Calm,
        ] {
            assert_eq!(rules_for(state).len(), replacements(state).len());
        }
    }

    #[test]
    fn test_crisis_is_directive() {
        assert_eq!(
            adjust_tone("Breathe gently and consider calling someone", EmotionalState::Crisis),
            "Breathe immediately and please calling someone"
        );
    }

    #[test]
    fn test_distressed_is_calming() {
        assert_eq!(
            adjust_tone("Immediately light a candle, it is urgent", EmotionalState::Distressed),
            "Gently light a candle, it is important"
        );
    }

    #[test]
    fn test_calm_is_peaceful() {
        assert_eq!(
            adjust_tone("Act quickly, there is danger", EmotionalState::Calm),
            "Act calmly, there is challenge"
        );
    }

    #[test]
    fn test_whole_words_only() {
        // "must" inside "mustard", "urgent" inside "insurgent"
        assert_eq!(
            adjust_tone("mustard seeds for the insurgent", EmotionalState::Distressed),
            "mustard seeds for the insurgent"
        );
    }

    #[test]
    fn test_neutral_is_untouched() {
        let text = "Immediately and gently, quickly and slowly";
        assert_eq!(adjust_tone(text, EmotionalState::Neutral), text);
    }

    #[test]
    fn test_only_one_tier_applies() {
        // distressed turns "immediately" into "gently"; crisis rules must not then
        // turn it back
        assert_eq!(
            adjust_tone("act immediately", EmotionalState::Distressed),
            "act gently"
        );
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("Gently", "immediately"), "Immediately");
        assert_eq!(match_case("gently", "immediately"), "immediately");
        assert_eq!(match_case("G", ""), "");
    }
}
