//! # libpbm
//!
//!
//! This library reads monochrome images stored in the binary Portable Bitmap format (`P4`) and
//! re-emits them as C source arrays, for embedding icons into firmware that draws on small
//! displays.
//!
//! The pipeline has three stages, run strictly in sequence:
//!
//! 1. the header reader recovers width and height (skipping `#` comment lines),
//! 2. the bitmap decoder reads the packed payload that follows the header,
//! 3. the bitmask encoder expands every payload bit into an inverted 8-bit literal
//!    (`1` becomes `0x00`, `0` becomes `0xFF`) and lays the literals out as a line-wrapped
//!    `unsigned char` array.
//!
//! ### Limitations
//!
//! Only the binary bitmap variant (`P4`) is supported. The ASCII variant (`P1`) and the gray or
//! color members of the netpbm family are rejected with [`FormatError::BadMagic`].
//!
//! By default the decoder reads exactly `width * height` payload bytes. This matches the icons
//! this tool was built for, but is **not** what the netpbm format describes: a real `P4` file
//! packs 8 pixels per byte and pads every row to a byte boundary, so its payload is
//! `ceil(width / 8) * height` bytes. Use [`PayloadLayout::RowPadded`] to read that length
//! instead.
//!
//! ### Usage
//!
//! #### Converting a PBM file into a C array
//!
//! ```rust
//! use libpbm::{EncodeOptions, PayloadLayout, PbmImageFile};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut pbm = b"P4\n# an arrow\n1 1\n".to_vec();
//!     pbm.push(0b1000_0000);
//!
//!     let image = PbmImageFile::from_reader(pbm.as_slice(), PayloadLayout::Unpadded)?;
//!     let array = image.to_bitmask_array(
//!         "arrow_bits".to_owned(),
//!         "arrow.pbm".to_owned(),
//!         &EncodeOptions::default(),
//!     );
//!
//!     assert_eq!(
//!         array.to_string(),
//!         "// Generated from arrow.pbm\n\
//!          // Image size: 1x1\n\
//!          \n\
//!          unsigned char arrow_bits[] = {\n\
//!          0x00,0xFF,0xFF,0xFF,\n\
//!          0xFF,0xFF,0xFF,0xFF,\n\
//!          };\n"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! #### Writing the array to disk
//!
//! [`BitmaskArray::into_file`] renders the whole artifact in memory first and then replaces the
//! destination atomically, so a failed conversion never leaves a half-written source file behind
//! for a build to pick up.
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

mod error;
/// Module containing types for PBM image files and their C array encoding
pub mod image;
mod serde;

pub use error::Error;
pub use image::bitmap::BitMap;
pub use image::bitmask::{array_identifier, BitmaskArray, EncodeOptions, EncodedLiteral};
pub use image::header::BitmapHeader;
pub use image::PayloadLayout;
pub use image::PbmImageFile;
pub use serde::error::FormatError;
pub use serde::Magic;

/// Marker byte starting a comment line in the header
const COMMENT: u8 = b'#';
/// Number of literals emitted per output line unless configured otherwise
const DEFAULT_LITERALS_PER_LINE: usize = 4;
// Generated sources always use unix line endings
const LF: &str = "\n";
