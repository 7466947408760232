//! Template placeholder tokens.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const DEITY: &str = "{deity}";
pub const PROTECTION_SYMBOL: &str = "{protectionSymbol}";
pub const LIGHT_COLOR: &str = "{lightColor}";
pub const PRAYER: &str = "{prayer}";
pub const CULTURAL_REFERENCE: &str = "{culturalReference}";

/// Every token the adapter substitutes.
pub const PLACEHOLDERS: [&str; 5] = [DEITY, PROTECTION_SYMBOL, LIGHT_COLOR, PRAYER, CULTURAL_REFERENCE];

/// Known tokens still present in `text`.
#[must_use]
pub fn unresolved_placeholders(text: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .into_iter()
        .filter(|token| text.contains(token))
        .collect()
}

static TOKEN_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    let alternatives: Vec<String> = PLACEHOLDERS.into_iter().map(regex::escape).collect();
    Regex::new(&alternatives.join("|")).ok()
});

/// Replace every known token in one left-to-right pass.
///
/// Text returned by `value` is never rescanned within the same pass.
#[must_use]
pub fn replace_placeholders<F>(text: &str, mut value: F) -> String
where
    F: FnMut(&str) -> String,
{
    match TOKEN_PATTERN.as_ref() {
        Some(pattern) => pattern
            .replace_all(text, |caps: &Captures<'_>| value(&caps[0]))
            .into_owned(),
        None => text.to_string(),
    }
}
