//! Migration Errors
//!
//! Two failure kinds abort migration of a single document; every other
//! unrecognized construct passes through instead of failing.

use thiserror::Error;

/// An error that aborts migration of the current document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrateError {
    /// The document does not contain the script region delimiter.
    #[error("no {delimiter} tag found in document")]
    MissingScriptTag {
        /// The delimiter that was expected.
        delimiter: &'static str,
    },

    /// A construct recognized as started was not followed by a recognizable
    /// continuation.
    #[error("unrecognized {context} line: {line:?}")]
    PatternMismatch {
        /// Which recognizer gave up.
        context: &'static str,
        /// The offending line, verbatim.
        line: String,
    },
}

pub type Result<T> = std::result::Result<T, MigrateError>;
