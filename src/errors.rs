use thiserror::Error;

/// The result type for the `re101` crate.
pub type Result<T> = std::result::Result<T, ReError>;

/// The error type for the `re101` crate.
#[derive(Error, Debug, Clone)]
pub struct ReError {
    /// The source of the error.
    pub source: Box<ReErrorKind>,
}

impl ReError {
    /// Create a new `ReError`.
    pub fn new(kind: ReErrorKind) -> Self {
        ReError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ReErrorKind {
        &self.source
    }

    pub(crate) fn invalid_configuration(msg: impl Into<String>) -> Self {
        ReError::new(ReErrorKind::InvalidConfiguration(msg.into()))
    }

    pub(crate) fn pattern_compilation(pattern: &str, message: impl ToString) -> Self {
        ReError::new(ReErrorKind::PatternCompilation {
            pattern: pattern.to_string(),
            message: message.to_string(),
        })
    }
}

impl std::fmt::Display for ReError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug, Clone)]
pub enum ReErrorKind {
    /// A token class, flag letter or configuration value outside the accepted domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A pattern could not be compiled by the selected regex engine.
    /// For the built-in patterns this indicates a packaging bug, not a runtime condition.
    #[error("Failed to compile pattern '{pattern}': {message}")]
    PatternCompilation {
        /// The pattern text that failed to compile.
        pattern: String,
        /// The message reported by the regex engine.
        message: String,
    },

    /// An error occurred during the parsing of the regex syntax.
    #[error("'{1}' {0}")]
    RegexSyntaxError(regex_syntax::ast::Error, String),

    /// No registered pattern carries the requested name.
    #[error("Unknown pattern name: {0}")]
    UnknownPattern(String),
}
