use std::path::Path;

use anyhow::{Context, Result};
use libpbm::{array_identifier, EncodeOptions, PayloadLayout, PbmImageFile};
use tracing::{debug, info, instrument};

/// Converts the binary PBM image at `pbm_file` into a C array source file at `output_name`
///
/// The output file is only created (or replaced) once the whole input has been decoded and
/// encoded.
#[instrument(skip(options))]
pub fn pbm_to_bitmask(
    pbm_file: &Path,
    output_name: &Path,
    layout: PayloadLayout,
    options: &EncodeOptions,
) -> Result<()> {
    let pbm = PbmImageFile::from_file(pbm_file, layout)
        .with_context(|| format!("Error reading PBM file {}", pbm_file.display()))?;
    debug!("Read pbm from file");

    let identifier = array_identifier(pbm_file)?;
    let array = pbm.to_bitmask_array(identifier, pbm_file.display().to_string(), options);
    debug!(
        "Encoded {} literals into {}",
        array.literals().len(),
        array.identifier()
    );

    info!("Writing bitmask array to {}", output_name.display());
    array
        .into_file(output_name)
        .with_context(|| format!("Error writing {}", output_name.display()))?;
    info!("Successfully wrote bitmask array to {}", output_name.display());
    Ok(())
}
