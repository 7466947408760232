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

pub mod engine;
pub mod environment;
pub mod rules;

pub use engine::RitualEngine;
pub use environment::{Environment, Season, TimeOfDay};
pub use rules::{RitualRule, RitualSuggestion, default_rules, grounding_ritual};
