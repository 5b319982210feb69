/// Errors that can occur while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The grid handed to [`solve`](crate::solve) fails the consistency check before any
    /// branching has taken place: some unit already has an empty cell, or two singleton
    /// cells of the same unit are pinned to the same color.
    #[display("the initial grid is inconsistent")]
    Inconsistent,
}
