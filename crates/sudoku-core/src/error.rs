/// Errors that can occur while constructing or addressing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A grid was requested with a size outside the supported set
    /// `{1, 4, 9, 16, 25, 36, 49, 64}`.
    #[display("invalid grid size {_0}: size must be a supported perfect square")]
    InvalidSize(usize),
}
