//! Types shared by the cultural adaptation engine and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tradition-specific vocabulary substituted into content templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub tradition: String,
    pub deity: String,
    pub protection_symbol: String,
    pub light_color: String,
    pub prayer: String,
    pub color_scheme: String,
    /// Index 0 serves protection content, index 1 healing content.
    #[serde(default)]
    pub cultural_references: Vec<String>,
}

impl CulturalProfile {
    /// All free-text fields, for validation.
    #[must_use]
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.tradition.as_str(),
            self.deity.as_str(),
            self.protection_symbol.as_str(),
            self.light_color.as_str(),
            self.prayer.as_str(),
            self.color_scheme.as_str(),
        ];
        fields.extend(self.cultural_references.iter().map(String::as_str));
        fields
    }
}

/// Declared emotional state of the reader; drives tone adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    Crisis,
    Distressed,
    Calm,
    #[default]
    Neutral,
}

impl EmotionalState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crisis => "crisis",
            Self::Distressed => "distressed",
            Self::Calm => "calm",
            Self::Neutral => "neutral",
        }
    }

    /// Unknown states are treated as neutral.
    #[must_use]
    pub fn from_str_lowercase(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "crisis" => Self::Crisis,
            "distressed" => Self::Distressed,
            "calm" => Self::Calm,
            _ => Self::Neutral,
        }
    }
}

impl FromStr for EmotionalState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_lowercase(s))
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of content a template produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Protection,
    Healing,
    Cleansing,
    #[default]
    Guidance,
    Other(String),
}

impl ContentType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Protection => "protection",
            Self::Healing => "healing",
            Self::Cleansing => "cleansing",
            Self::Guidance => "guidance",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "protection" => Self::Protection,
            "healing" => Self::Healing,
            "cleansing" => Self::Cleansing,
            "guidance" => Self::Guidance,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.as_str().to_string()
    }
}

impl FromStr for ContentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the content is for and what it is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdaptationContext {
    pub tradition: String,
    #[serde(default)]
    pub emotional_state: EmotionalState,
    #[serde(default)]
    pub content_type: ContentType,
}

impl AdaptationContext {
    #[must_use]
    pub fn new(
        tradition: impl Into<String>,
        emotional_state: EmotionalState,
        content_type: impl Into<ContentType>,
    ) -> Self {
        Self {
            tradition: tradition.into(),
            emotional_state,
            content_type: content_type.into(),
        }
    }
}
