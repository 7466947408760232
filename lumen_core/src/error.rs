use thiserror::Error;

use crate::tier::{Feature, SubscriptionTier};

pub type Result<T> = std::result::Result<T, LumenError>;

#[derive(Debug, Error)]
pub enum LumenError {
    #[error("{feature} requires the {required} tier (current: {current})")]
    FeatureLocked {
        feature: Feature,
        required: SubscriptionTier,
        current: SubscriptionTier,
    },

    #[error("invalid severity value: {0}")]
    InvalidSeverity(u8),

    #[error("invalid indicator: {0}")]
    InvalidIndicator(String),

    #[error("unknown subscription tier: {0}")]
    UnknownTier(String),

    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}
