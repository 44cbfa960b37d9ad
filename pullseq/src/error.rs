use thiserror::Error;

/// Errors raised while building a sequence.
///
/// Pulling never fails: once a chain is built, `pull` only ever returns an
/// element or the end of the sequence. These errors come from the few
/// constructors and operators that can reject their arguments up front.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A range was given a step of zero, so it would never make progress.
    #[error("range step must not be zero")]
    ZeroStep,
    /// Cycling was requested over a chain rooted in a one-shot source.
    ///
    /// Generators and one-shot iterators cannot replay their elements, so a
    /// restarted copy shares their position instead of starting over.
    #[error("sequence cannot be restarted independently")]
    NotRestartable,
}

pub type Result<T> = std::result::Result<T, Error>;
