use thiserror::Error;

/// Caller contract violations for [`DynamicCoverSolver`] updates.
///
/// Validation runs before any state is touched, so a failed `insert` or
/// `delete` leaves the structure exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoverError {
    #[error("vertex {v} out of range, graph has {n} vertices")]
    InvalidVertex { v: usize, n: usize },
    #[error("self loop on vertex {0}")]
    SelfLoop(usize),
    #[error("edge ({0}, {1}) is already present")]
    DuplicateEdge(usize, usize),
    #[error("edge ({0}, {1}) is not present")]
    MissingEdge(usize, usize),
    /// Internal consistency fault: the leveling invariant still fails for a
    /// vertex between updates. Never produced by normal operation.
    #[error("leveling invariant violated at vertex {0}")]
    InvariantViolation(usize),
}

pub trait DynamicCoverSolver {
    /// New instance for an empty graph on n vertices.
    ///
    /// Panics if `n == 0` or `epsilon <= 0`.
    fn new(n: usize, epsilon: f64) -> Self;
    /// Add the edge (u, v).
    fn insert(&mut self, u: usize, v: usize) -> Result<(), CoverError>;
    /// Remove the edge (u, v).
    fn delete(&mut self, u: usize, v: usize) -> Result<(), CoverError>;
    /// The current approximate vertex cover. Order is unspecified and not
    /// stable across updates.
    fn vertex_cover(&self) -> Vec<usize>;
    /// Value of the fractional matching dual to the cover.
    fn matching_weight(&self) -> f64;
    /// Human-readable snapshot of per-vertex state, the cover and the
    /// matching value.
    fn describe(&self) -> String;
}
