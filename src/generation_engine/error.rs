use thiserror::Error;

/// Failures the generation engine can surface.
///
/// Strategies never return short or invalid combinations; any configuration
/// the bounded retry budget cannot satisfy errors out explicitly. The retry
/// executor in [`crate::retry`] deliberately has no variant here: it returns
/// the wrapped operation's own last error unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Structurally invalid options, rejected before any drawing starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The active constraint set admits no valid combination within the
    /// bounded number of whole-result attempts.
    #[error("no combination satisfies the active constraints after {attempts} attempt(s)")]
    ConstraintUnsatisfiable { attempts: u32 },
}
