#![deny(
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

pub mod culture;
pub mod detection;
pub mod error;
pub mod severity;
pub mod tier;

pub use culture::{AdaptationContext, ContentType, CulturalProfile, EmotionalState};
pub use detection::{DetectionEvent, DetectionResult, Indicator};
pub use error::{LumenError, Result};
pub use severity::{Severity, SeverityTier};
pub use tier::{Feature, SubscriptionTier, ensure_access};
