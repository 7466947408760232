#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod detector;
pub mod keywords;

pub use detector::{DetectorConfig, DetectorKind, KeywordDetector};
pub use keywords::{KeywordSet, KeywordTable, TypeRule, entity_detector, marriage_detector};
pub use lumen_core::{DetectionResult, Indicator, Severity, SeverityTier};
