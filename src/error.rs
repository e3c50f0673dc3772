use thiserror::Error;

/// Errors returned by color resolution and legend stepping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string could not be resolved to a color.
    #[error("invalid color “{0}”")]
    InvalidColorSpec(String),
    /// The legend domain violates one of its invariants.
    #[error("invalid legend domain: {0}")]
    InvalidDomain(String),
}

pub type Result<T> = std::result::Result<T, Error>;
