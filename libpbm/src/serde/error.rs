use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
/// Ways an input can fail to be a binary PBM (`P4`) image
pub enum FormatError {
    /// The first line is not the `P4` magic token
    #[error("not a binary PBM (P4) file: found {0}")]
    BadMagic(String),
    /// The input ended before the dimensions line
    #[error("unexpected end of input before the dimensions line")]
    UnexpectedEof,
    /// The dimensions line does not hold exactly two positive integers
    #[error("malformed dimensions line: {0:?}")]
    MalformedDimensions(String),
    /// Fewer payload bytes follow the header than the dimensions require
    #[error("truncated pixel data: expected {expected} bytes, got {actual}")]
    TruncatedPayload {
        /// payload length required by the header
        expected: usize,
        /// payload length actually available
        actual: usize,
    },
}
