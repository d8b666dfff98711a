use bon::Builder;
use itertools::Itertools;
use std::{
    fmt::Display,
    fs,
    io::{self, Write},
    path::Path,
};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::{image::bitmap::BitMap, Error, DEFAULT_LITERALS_PER_LINE, LF};

const IDENTIFIER_SUFFIX: &str = "_bits";
const ELEMENT_TYPE: &str = "unsigned char";
// mode of newly created outputs before the umask
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Creates the temporary file an output is staged in
///
/// New outputs get the permissions a plain `File::create` would give them, instead of the
/// owner-only mode temporary files default to.
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }
    builder.tempfile_in(dir)
}

/// One emitted byte of the output array, derived from a single pixel bit
///
/// The bit is expanded to a full byte (`0` or `0xFF`) and then inverted, so a set pixel
/// becomes `0x00` and an unset pixel becomes `0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedLiteral(u8);

impl EncodedLiteral {
    /// Encodes one pixel bit
    #[must_use]
    pub fn from_bit(bit: bool) -> Self {
        let expanded = u8::from(bit) * u8::MAX;
        Self(!expanded)
    }

    /// Returns the byte value of the literal
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for EncodedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02X},", self.0)
    }
}

/// Derives the C array name from the input path
///
/// The file stem has every `-` and space replaced by `_`, followed by `_bits`:
/// `icons/my-icon.pbm` becomes `my_icon_bits`.
///
/// # Errors
///
/// Returns [`Error::InvalidFileName`] if the path has no file name (e.g. `..` or an empty path).
pub fn array_identifier(input: &Path) -> Result<String, Error> {
    let stem = input
        .file_stem()
        .ok_or_else(|| Error::InvalidFileName(input.to_path_buf()))?
        .to_string_lossy();
    Ok(stem.replace(['-', ' '], "_") + IDENTIFIER_SUFFIX)
}

/// Layout options for [`BitmaskArray`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct EncodeOptions {
    /// Number of literals per line of the array body. Values below 1 are treated as 1.
    #[builder(default = DEFAULT_LITERALS_PER_LINE)]
    pub literals_per_line: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A C `unsigned char` array holding one [`EncodedLiteral`] per pixel bit
///
/// Its [`Display`] output is the complete generated source:
///
/// ```"not rust"
/// // Generated from <source>
/// // Image size: <width>x<height>
///
/// unsigned char <identifier>[] = {
/// 0xFF,0x00,0xFF,0xFF,
/// ...
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmaskArray {
    identifier: String,
    source: String,
    width: u32,
    height: u32,
    literals: Vec<EncodedLiteral>,
    literals_per_line: usize,
}

impl BitmaskArray {
    /// Encodes every bit of `bitmap` into a new array
    ///
    /// `source` is only used for the preamble comment.
    #[must_use]
    pub fn new(
        identifier: String,
        source: String,
        bitmap: &BitMap,
        options: &EncodeOptions,
    ) -> Self {
        let literals: Vec<_> = bitmap.bits().map(EncodedLiteral::from_bit).collect();
        debug!("Encoded {} literals for {identifier}", literals.len());
        Self {
            identifier,
            source,
            width: bitmap.width(),
            height: bitmap.height(),
            literals,
            literals_per_line: options.literals_per_line.max(1),
        }
    }

    /// Returns the array name
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the encoded literals in output order
    #[must_use]
    pub fn literals(&self) -> &[EncodedLiteral] {
        &self.literals
    }

    /// Writes the generated source to `w`
    ///
    /// # Errors
    ///
    /// This will error if writing to `w` fails
    pub fn write_to(&self, mut w: impl Write) -> Result<(), Error> {
        w.write_all(self.to_string().as_bytes())?;
        w.flush()?;
        Ok(())
    }

    /// Attempts to save the generated source at the provided path
    ///
    /// The source is written to a temporary file next to `filename` which then replaces
    /// `filename` in a single rename. If anything fails, `filename` is left untouched.
    /// An existing `filename` keeps its permissions, a new one is created with the default
    /// permissions of the process (`0o666` minus the umask on unix).
    ///
    /// # Errors
    ///
    /// This will error if the temporary file cannot be created, written, or renamed
    #[instrument(skip(self), fields(identifier = %self.identifier))]
    pub fn into_file(self, filename: impl AsRef<Path> + std::fmt::Debug) -> Result<(), Error> {
        let filename = filename.as_ref();
        let rendered = self.to_string();
        let dir = match filename.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = staging_file(dir)?;
        if let Ok(existing) = fs::metadata(filename) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
        tmp.write_all(rendered.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(filename).map_err(|e| e.error)?;
        info!("Wrote {} bytes to {}", rendered.len(), filename.display());
        Ok(())
    }
}

impl Display for BitmaskArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "// Generated from {}{LF}", self.source)?;
        write!(f, "// Image size: {}x{}{LF}{LF}", self.width, self.height)?;
        write!(f, "{ELEMENT_TYPE} {}[] = {{{LF}", self.identifier)?;
        // a short final group still ends its line
        for group in self.literals.chunks(self.literals_per_line) {
            write!(f, "{}{LF}", group.iter().join(""))?;
        }
        write!(f, "}};{LF}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bits_become_zero() {
        assert_eq!(EncodedLiteral::from_bit(true).value(), 0x00);
        assert_eq!(EncodedLiteral::from_bit(false).value(), 0xFF);
        assert_eq!(EncodedLiteral::from_bit(false).to_string(), "0xFF,");
        assert_eq!(EncodedLiteral::from_bit(true).to_string(), "0x00,");
    }

    #[test]
    fn identifier_from_stem() {
        for (path, expected) in [
            ("my-icon.pbm", "my_icon_bits"),
            ("my icon.pbm", "my_icon_bits"),
            ("assets/arrow-left up.pbm", "arrow_left_up_bits"),
            ("noext", "noext_bits"),
        ] {
            assert_eq!(array_identifier(Path::new(path)).unwrap(), expected);
        }
    }

    #[test]
    fn identifier_needs_a_file_name() {
        assert!(matches!(
            array_identifier(Path::new("..")),
            Err(Error::InvalidFileName(_))
        ));
    }

    #[test]
    fn short_final_group_ends_its_line() {
        let bitmap = BitMap::builder()
            .width(1)
            .height(1)
            .pixels(vec![0xFF])
            .build();
        let options = EncodeOptions::builder().literals_per_line(3).build();
        let array = BitmaskArray::new("x_bits".into(), "x.pbm".into(), &bitmap, &options);
        let body: Vec<_> = array.to_string().lines().skip(4).map(str::to_owned).collect();
        assert_eq!(
            body,
            ["0x00,0x00,0x00,", "0x00,0x00,0x00,", "0x00,0x00,", "};"]
        );
    }
}
