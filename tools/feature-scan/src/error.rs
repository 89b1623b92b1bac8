use thiserror::Error;

/// Fatal configuration problems. Raised before any feature is examined.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported HSSD version: {0}")]
    UnsupportedVersion(String),

    #[error("unsupported survey area: {0}")]
    UnsupportedSurveyArea(String),

    #[error("unsupported profile: {0}")]
    UnsupportedProfile(String),

    #[error("invalid MHW value {0}: must be a finite, non-negative number of metres")]
    InvalidMhw(f64),

    #[error("invalid character limit {0}: must be greater than zero")]
    InvalidCharacterLimit(usize),

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
