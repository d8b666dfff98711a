use bon::Builder;
use std::io::Read;
use tracing::info;

use crate::{image::PayloadLayout, serde::error::FormatError, Error};

/// Raw packed payload of a PBM image file, together with the dimensions it was read for
#[derive(Builder, Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct BitMap {
    /// The width of the image
    width: u32,
    /// The height of the image
    height: u32,
    /// Payload bytes, 8 pixel bits each, most significant bit first
    pixels: Vec<u8>,
}

impl BitMap {
    /// Reads the payload of a `width` x `height` image from `r`
    ///
    /// Exactly [`PayloadLayout::payload_len`] bytes are consumed, anything after them is left
    /// in the reader. Bytes are passed through unchanged.
    ///
    /// # Errors
    ///
    /// - [`FormatError::TruncatedPayload`] if `r` ends early
    /// - [`Error::DimensionsTooLarge`] if the payload length overflows `usize`
    /// - [`Error::Io`] if reading fails
    pub fn from_reader(
        r: &mut impl Read,
        width: u32,
        height: u32,
        layout: PayloadLayout,
    ) -> Result<Self, Error> {
        let expected = layout.payload_len(width, height)?;

        // sized by the bytes present, not by the header
        let mut pixels = Vec::new();
        r.by_ref()
            .take(u64::try_from(expected).unwrap_or(u64::MAX))
            .read_to_end(&mut pixels)?;
        if pixels.len() < expected {
            return Err(FormatError::TruncatedPayload {
                expected,
                actual: pixels.len(),
            }
            .into());
        }

        info!("Image size: {width}x{height}");
        info!("Data length: {} bytes", pixels.len());
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the width of the image
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw payload bytes
    #[must_use]
    pub fn pixel_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns every payload bit in order, most significant bit of each byte first
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.pixels
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |position| (byte >> position) & 1 == 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_msb_first_in_file_order() {
        let bitmap = BitMap::builder()
            .width(1)
            .height(2)
            .pixels(vec![0b1000_0001, 0b0100_0000])
            .build();
        let bits: Vec<_> = bitmap.bits().map(u8::from).collect();
        assert_eq!(bits, [1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn leaves_trailing_bytes_in_reader() {
        let mut data: &[u8] = &[1, 2, 3, 4, 5];
        let bitmap = BitMap::from_reader(&mut data, 2, 2, PayloadLayout::Unpadded).unwrap();
        assert_eq!(bitmap.pixel_bytes(), [1, 2, 3, 4]);
        assert_eq!(data, [5]);
    }
}
