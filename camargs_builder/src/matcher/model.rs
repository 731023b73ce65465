use thiserror::Error;

use crate::api::InvalidCapture;

/// The error which stopped a parse.
///
/// Parsing stops at the first error; declarations matched before it remain matched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `--NAME` token which matches no option.
    #[error("invalid option '--{0}'.")]
    UnknownOption(String),

    /// A character within a `-C..` token which matches no option.
    #[error("invalid option '-{0}'.")]
    UnknownShortOption(char),

    /// A bare token after every positional argument has been filled.
    #[error("unexpected positional argument '{0}'.")]
    UnknownPositional(String),

    /// A value taking option at the end of the input, or followed by an option-like token.
    #[error("missing value for option '{0}'.")]
    MissingValue(String),

    /// A value token which does not capture into the declared kind.
    #[error("argument '{name}' {source}.")]
    InvalidValue {
        /// The Cli spelling of the parameter.
        name: String,
        /// The capture failure.
        source: InvalidCapture,
    },

    /// A value taking option which is not the final character of a short option cluster.
    #[error("option '{0}' takes a value, so it must be last in a short option cluster.")]
    IncorrectUsage(String),

    /// A required positional argument which was never filled.
    #[error("missing required positional argument '{0}'.")]
    MissingPositional(String),
}

impl ParseError {
    /// Whether the diagnostic should point the user towards `--help`.
    pub fn suggests_help(&self) -> bool {
        !matches!(self, ParseError::InvalidValue { .. })
    }
}

/// What to do once all tokens have been matched.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete,
    PrintHelp,
}

// The per-token result of a successful match.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Step {
    Continue,
    Help,
}
