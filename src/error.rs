use thiserror::Error;

/// Kernel error taxonomy. Intentionally narrow: the kernel is pure, so the
/// only failure modes are bad configuration and structurally incomplete
/// records. Missing-but-optional fields (no skills, no location, no
/// experience requirement) are treated as "no constraint", never as errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// Configured factor weights must sum to exactly 100 percent. Raised at
    /// configuration time, never mid-computation.
    #[error("invalid weights: sum is {sum}, expected 100")]
    InvalidWeights { sum: u32 },

    /// Profile or opportunity is missing a required structural field, such
    /// as its identifier.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
