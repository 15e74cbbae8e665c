use thiserror::Error;

/// Reasons a program number lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The input could not be read as an integer program number.
    #[error("not a program number: {input:?}")]
    InvalidArgument { input: String },

    /// The input was an integer outside 0..=127.
    #[error("program number {value} is outside 0..=127")]
    OutOfRange { value: i64 },
}
