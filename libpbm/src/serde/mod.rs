pub mod error;
mod utils;

pub(crate) use utils::{parse_dimensions, trim_line};

use strum::{EnumString, IntoStaticStr};

/// Magic tokens of the netpbm family
///
/// Only [`Magic::P4`] is accepted by the decoder, the others are recognised so that
/// rejections can say what was actually found.
#[derive(IntoStaticStr, EnumString, PartialEq, Eq, Debug, Copy, Clone)]
pub enum Magic {
    /// ASCII bitmap
    P1,
    /// ASCII graymap
    P2,
    /// ASCII pixmap
    P3,
    /// Binary bitmap
    P4,
    /// Binary graymap
    P5,
    /// Binary pixmap
    P6,
    /// Arbitrary map
    P7,
}

impl Magic {
    /// Returns the magic token as it appears in a file
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Into::<&'static str>::into(self)
    }

    /// Returns a human readable name of the format variant
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::P1 => "ASCII bitmap",
            Self::P2 => "ASCII graymap",
            Self::P3 => "ASCII pixmap",
            Self::P4 => "binary bitmap",
            Self::P5 => "binary graymap",
            Self::P6 => "binary pixmap",
            Self::P7 => "arbitrary map",
        }
    }
}

// longest excerpt of an unknown first line kept in error messages
const MAX_EXCERPT: usize = 16;

/// Describes an unexpected first line for [`error::FormatError::BadMagic`]
pub(crate) fn describe_magic(line: &[u8]) -> String {
    let token = trim_line(line);
    if let Some(magic) = std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<Magic>().ok())
    {
        return format!("{} ({})", magic.as_str(), magic.describe());
    }
    if token.is_empty() {
        return "an empty first line".to_owned();
    }
    let excerpt = &token[..token.len().min(MAX_EXCERPT)];
    format!("{:?}", String::from_utf8_lossy(excerpt))
}
