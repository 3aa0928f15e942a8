use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Contradictions raised inside Forcing Chain trials are recovered locally
/// and never reach the caller; everything else propagates unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed value string or candidate grid.
    #[error("parse error: {0}")]
    Parse(String),

    /// Placement onto a given cell, a filled cell, or outside the mask.
    #[error("invalid placement of {digit} at {cell}: {reason}")]
    InvalidPlacement {
        cell: String,
        digit: u8,
        reason: String,
    },

    /// A board invariant was violated by an applied action.
    #[error("contradiction: {0}")]
    Contradiction(String),

    /// Cooperative cancellation was observed.
    #[error("solve aborted")]
    Aborted,
}
