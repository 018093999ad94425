//! Configuration for the pattern demos.
//!
//! Configuration is built in code (from parsed command-line flags); nothing
//! is read from files or the environment.

use tracing::Level;

use crate::error::PatternError;

/// Base trait for configuration types.
///
/// # Example
///
/// ```rust
/// use patterncraft::Config;
///
/// #[derive(Debug, Clone)]
/// struct MenuConfig {
///     verbose: bool,
/// }
///
/// impl Config for MenuConfig {
///     fn name(&self) -> &str {
///         "menu"
///     }
///
///     fn is_verbose(&self) -> bool {
///         self.verbose
///     }
/// }
/// ```
pub trait Config: Send + Sync {
    /// Returns the configuration name/identifier.
    fn name(&self) -> &str {
        "default"
    }

    /// Returns whether verbose output is enabled.
    fn is_verbose(&self) -> bool {
        false
    }

    /// Returns whether debug mode is enabled.
    fn is_debug(&self) -> bool {
        false
    }

    /// Validates the configuration.
    ///
    /// Returns Ok(()) if valid, or an error message describing the issue.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Maximum log level implied by the verbosity flags.
    fn log_level(&self) -> Level {
        if self.is_debug() {
            Level::TRACE
        } else if self.is_verbose() {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

/// Default buffer size of the stock alert stream.
pub const DEFAULT_ALERT_BUFFER: usize = 16;

/// Configuration shared by the demo binaries.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Configuration name
    pub name: String,
    /// Verbose output flag
    pub verbose: bool,
    /// Debug mode flag
    pub debug: bool,
    /// Capacity of the alert event stream
    pub alert_buffer: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            verbose: false,
            debug: false,
            alert_buffer: DEFAULT_ALERT_BUFFER,
        }
    }
}

impl DemoConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the alert stream capacity.
    pub fn with_alert_buffer(mut self, size: usize) -> Self {
        self.alert_buffer = size;
        self
    }

    /// Enable verbose output.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Enable debug mode.
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Validate, replacing a rejected alert buffer with the default.
    ///
    /// The rejection is handed back so the caller can report it.
    pub fn validated(mut self) -> (Self, Option<PatternError>) {
        match self.validate() {
            Ok(()) => (self, None),
            Err(msg) => {
                self.alert_buffer = DEFAULT_ALERT_BUFFER;
                (self, Some(PatternError::Config(msg)))
            }
        }
    }
}

impl Config for DemoConfig {
    fn name(&self) -> &str {
        if self.name.is_empty() {
            "default"
        } else {
            &self.name
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn is_debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> Result<(), String> {
        if self.alert_buffer == 0 {
            return Err("alert_buffer must be greater than 0".to_string());
        }
        Ok(())
    }
}
