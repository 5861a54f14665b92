use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumbleError {
    /// A caller-supplied value outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed or unusable dictionary input.
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
