//! Error types for the veer shell core.

/// Errors produced at command registration time.
///
/// These are configuration errors: a shell whose namespace is inconsistent
/// cannot dispatch safely, so registration fails loudly and atomically.
/// Runtime user mistakes (an unknown command token, a rejected argument
/// list) are reported through the [`Prompt`](crate::Prompt) instead and
/// never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A name or alias is already taken, either by a previously registered
    /// command or by another command in the same batch.
    #[error("naming conflict: {0:?} is already registered")]
    NameConflict(String),

    /// A name or alias is empty or contains whitespace.
    #[error("invalid command name: {0:?}")]
    InvalidName(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;
