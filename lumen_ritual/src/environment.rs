//! Environmental context a ritual is matched against.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Dawn,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket a 24h clock hour. Hours past 23 wrap.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=7 => Self::Dawn,
            8..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Northern-hemisphere meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Month is 1-based. Out-of-range months yield `None`.
    #[must_use]
    pub const fn from_month(month: u32) -> Option<Self> {
        match month {
            3..=5 => Some(Self::Spring),
            6..=8 => Some(Self::Summer),
            9..=11 => Some(Self::Autumn),
            12 | 1 | 2 => Some(Self::Winter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub time_of_day: TimeOfDay,
    /// Free-text weather description, e.g. "light rain".
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl Environment {
    #[must_use]
    pub const fn new(time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            weather: None,
            season: None,
        }
    }

    #[must_use]
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Time of day and season from a timestamp.
    #[must_use]
    pub fn at<Tz: TimeZone>(when: &DateTime<Tz>) -> Self {
        Self {
            time_of_day: TimeOfDay::from_hour(when.hour()),
            weather: None,
            season: Season::from_month(when.month()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::from_hour(8), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(29), TimeOfDay::Dawn);
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(1), Some(Season::Winter));
        assert_eq!(Season::from_month(4), Some(Season::Spring));
        assert_eq!(Season::from_month(7), Some(Season::Summer));
        assert_eq!(Season::from_month(10), Some(Season::Autumn));
        assert_eq!(Season::from_month(12), Some(Season::Winter));
        assert_eq!(Season::from_month(0), None);
        assert_eq!(Season::from_month(13), None);
    }

    #[test]
    fn test_environment_at() {
        let Some(offset) = FixedOffset::east_opt(0) else {
            panic!("zero offset is valid");
        };
        let Some(when) = offset.with_ymd_and_hms(2024, 10, 31, 22, 15, 0).single() else {
            panic!("valid timestamp");
        };
        let env = Environment::at(&when);
        assert_eq!(env.time_of_day, TimeOfDay::Night);
        assert_eq!(env.season, Some(Season::Autumn));
        assert_eq!(env.weather, None);

        // any timestamp yields some season
        assert!(Environment::at(&Utc::now()).season.is_some());
    }
}
