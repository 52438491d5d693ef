//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `EpiError` or wrap `EpiError` as one variant, whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("invalid parameter `{name}` = {value}: must be {expected}")]
    InvalidParameter {
        name:     &'static str,
        value:    String,
        expected: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EpiError {
    pub(crate) fn invalid(
        name:     &'static str,
        value:    impl ToString,
        expected: &'static str,
    ) -> Self {
        EpiError::InvalidParameter { name, value: value.to_string(), expected }
    }
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
