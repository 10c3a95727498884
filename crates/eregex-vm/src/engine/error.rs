//! Errors that can occur while matching.

/// Ways a match can give up.
///
/// None of these mean "no match": a caller seeing one of them cannot tell
/// whether the subject would have matched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Too many instructions executed in one attempt.
    #[error("runtime execution limit exceeded ({0} instructions)")]
    ExecFuelExhausted(u32),

    /// Too many deferred alternatives pending at once.
    #[error("runtime fork limit exceeded ({0} pending forks)")]
    ForkLimitExceeded(u32),
}
