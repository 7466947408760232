use thiserror::Error;

pub type Result<T> = std::result::Result<T, CultureError>;

#[derive(Debug, Error)]
pub enum CultureError {
    #[error("tradition id must not be empty")]
    EmptyTradition,

    #[error("profile '{tradition}' field contains placeholder {token}")]
    PlaceholderInProfile {
        tradition: String,
        token: &'static str,
    },

    #[error("profile '{tradition}' field contains a brace: {field:?}")]
    BraceInProfile { tradition: String, field: String },

    #[error("profile '{0}' has no deity")]
    MissingDeity(String),

    #[error("default tradition '{0}' is not registered")]
    UnknownDefault(String),

    #[error("profile registry lock poisoned")]
    LockPoisoned,
}
