use std::path::PathBuf;

use crate::serde;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libpbm` errors
pub enum Error {
    /// Error returned if the input does not follow the binary PBM layout
    #[error("format error")]
    Format(#[from] serde::error::FormatError),
    /// Error returned if the underlying reader or writer fails
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    /// Error returned if no array name can be derived from the input path
    #[error("cannot derive an array name from {0:?}")]
    InvalidFileName(PathBuf),
    /// Error returned if the payload length for the declared dimensions does not fit in memory
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge {
        /// header width
        width: u32,
        /// header height
        height: u32,
    },
}
