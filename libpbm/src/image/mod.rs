#![allow(clippy::module_name_repetitions)]

pub(crate) mod bitmap;
pub(crate) mod bitmask;
pub(crate) mod header;

use crate::{error::Error, EncodeOptions};
use bitmap::BitMap;
use bitmask::BitmaskArray;
use header::BitmapHeader;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

/// A typed representation of a binary PBM image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbmImageFile {
    header: BitmapHeader,
    bitmap: BitMap,
}

#[derive(Default, Debug, Eq, PartialEq, Copy, Clone)]
/// How many payload bytes follow the header
pub enum PayloadLayout {
    /// `width * height` bytes
    ///
    /// The netpbm format stores `ceil(width / 8) * height` bytes, so for ordinary `P4` files
    /// this asks for more bytes than the image holds.
    #[default]
    Unpadded,
    /// `ceil(width / 8) * height` bytes, each row padded to a whole byte as netpbm specifies
    RowPadded,
}

impl PayloadLayout {
    /// Returns the payload length in bytes for an image of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionsTooLarge`] if the length does not fit in `usize`
    pub fn payload_len(self, width: u32, height: u32) -> Result<usize, Error> {
        let too_large = || Error::DimensionsTooLarge { width, height };
        let row_len = match self {
            Self::Unpadded => width,
            Self::RowPadded => width.div_ceil(8),
        };
        let row_len = usize::try_from(row_len).map_err(|_| too_large())?;
        let height = usize::try_from(height).map_err(|_| too_large())?;
        row_len.checked_mul(height).ok_or_else(too_large)
    }
}

impl PbmImageFile {
    /// Returns a reference to the [`BitmapHeader`]
    #[must_use]
    pub const fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Returns a reference to the decoded [`BitMap`]
    #[must_use]
    pub const fn bitmap(&self) -> &BitMap {
        &self.bitmap
    }

    /// Tries to read a [`Self`] from a buffer
    ///
    /// # Errors
    ///
    /// This function will error if the underlying buffer is invalid data for any reason:
    /// - the magic token is not `P4`
    /// - the buffer ends before the dimensions line
    /// - the dimensions line is not two positive integers
    /// - the payload is shorter than `layout` requires
    pub fn from_reader(mut r: impl BufRead, layout: PayloadLayout) -> Result<Self, Error> {
        let header = BitmapHeader::from_reader(&mut r)?;
        debug!("Reading payload with {layout:?} layout");
        let bitmap = BitMap::from_reader(&mut r, header.width, header.height, layout)?;
        Ok(Self { header, bitmap })
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or if the file contains invalid data.
    /// See [`Self::from_reader`] for potential errors
    pub fn from_file<P: AsRef<Path>>(filename: P, layout: PayloadLayout) -> Result<Self, Error> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file), layout)
    }

    /// Encodes the image into a C array named `identifier`
    ///
    /// `source` names the input in the generated preamble.
    #[must_use]
    pub fn to_bitmask_array(
        &self,
        identifier: String,
        source: String,
        options: &EncodeOptions,
    ) -> BitmaskArray {
        BitmaskArray::new(identifier, source, &self.bitmap, options)
    }

    /// Returns the image width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.header.width
    }

    /// Returns the image height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.header.height
    }
}
