pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the modulation and channel core.
///
/// Configuration problems surface at construction time; input problems
/// surface at the offending call. Channel noise is never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The component can never work with these parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The input does not fit the component's configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The noise source could not be set up.
    #[error("random source unavailable: {0}")]
    RandomSource(String),
}
