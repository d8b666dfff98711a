use bon::Builder;
use std::{fmt::Write, io::BufRead};
use tracing::{debug, trace};

use crate::{
    serde::{describe_magic, error::FormatError, parse_dimensions, trim_line, Magic},
    Error, COMMENT, LF,
};

/// Header of a binary PBM image file
///
/// ```"not rust"
/// P4
/// # zero or more comment lines
/// <width> <height>
/// ```
///
/// The pixel payload starts right after the line ending of the dimensions line.
#[derive(Debug, PartialEq, Eq, Clone, Builder)]
#[non_exhaustive]
pub struct BitmapHeader {
    /// Magic token, always [`Magic::P4`] for headers produced by this crate
    #[builder(default = Magic::P4)]
    pub magic: Magic,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Comment lines found between the magic token and the dimensions, without the leading `#`
    #[builder(default)]
    pub comments: Vec<String>,
}

impl BitmapHeader {
    /// Reads the header from the start of `r`
    ///
    /// On success `r` is positioned on the first byte of the pixel payload.
    ///
    /// # Errors
    ///
    /// - [`FormatError::BadMagic`] if the first line is not `P4`
    /// - [`FormatError::UnexpectedEof`] if the input ends before the dimensions line
    /// - [`FormatError::MalformedDimensions`] if the dimensions line is not two positive integers
    /// - [`Error::Io`] if reading fails
    pub fn from_reader(r: &mut impl BufRead) -> Result<Self, Error> {
        let mut line = Vec::new();
        r.read_until(b'\n', &mut line)?;
        if trim_line(&line) != Magic::P4.as_str().as_bytes() {
            return Err(FormatError::BadMagic(describe_magic(&line)).into());
        }

        let mut comments = Vec::new();
        loop {
            line.clear();
            if r.read_until(b'\n', &mut line)? == 0 {
                return Err(FormatError::UnexpectedEof.into());
            }
            if line.first() != Some(&COMMENT) {
                break;
            }
            let comment = String::from_utf8_lossy(trim_line(&line[1..])).into_owned();
            trace!("Skipping comment: {comment}");
            comments.push(comment);
        }

        let malformed =
            || FormatError::MalformedDimensions(String::from_utf8_lossy(trim_line(&line)).into());
        let dimensions = std::str::from_utf8(&line).map_err(|_| malformed())?;
        let (_, (width, height)) = parse_dimensions(dimensions).map_err(|_| malformed())?;
        debug!(
            "Parsed header: {width}x{height}, {} comment line(s)",
            comments.len()
        );

        Ok(Self {
            magic: Magic::P4,
            width,
            height,
            comments,
        })
    }

    /// Serializes the header in the layout [`Self::from_reader`] accepts
    #[must_use]
    pub fn to_header_format(&self) -> String {
        let mut buf = String::new();
        buf.push_str(self.magic.as_str());
        buf.push_str(LF);
        for comment in &self.comments {
            let _ = write!(buf, "# {comment}{LF}");
        }
        let _ = write!(buf, "{} {}{LF}", self.width, self.height);
        buf
    }
}
