//! Error types for Patterncraft.
//!
//! The pattern cores are total; these errors only come from the
//! registry lookups and demo configuration around them.

use thiserror::Error;

/// Root error type for Patterncraft operations.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Registry-related errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration rejected by `Config::validate`
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors that can occur in registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Behavior already registered with this name
    #[error("Behavior already registered: {0}")]
    AlreadyRegistered(String),

    /// No behavior registered under this name
    #[error("No behavior registered as: {0}")]
    NotFound(String),

    /// Invalid behavior name
    #[error("Invalid behavior name: {0:?}")]
    InvalidName(String),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type alias for general Patterncraft operations.
pub type PatternResult<T> = Result<T, PatternError>;
