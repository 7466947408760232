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

mod adapter;
mod error;
pub mod placeholder;
pub mod prefix;
pub mod profiles;
pub mod tone;

pub use adapter::{Adaptation, CulturalAdapter};
pub use error::{CultureError, Result};
pub use lumen_core::{AdaptationContext, ContentType, CulturalProfile, EmotionalState};
pub use placeholder::{PLACEHOLDERS, unresolved_placeholders};
pub use profiles::{DEFAULT_TRADITION, ProfileRegistry, stock_profiles};
