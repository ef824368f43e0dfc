use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::error::InventoryError;

pub(crate) fn write_console<W: Write>(out: &mut W, content: &str) -> Result<(), InventoryError> {
    out.write_all(content.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|err| InventoryError::Output(format!("console: {}", err)))
}

/// Write the whole report, flushing before the handle is dropped.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<PathBuf, InventoryError> {
    info!("write report to {}", path.display());

    let output_error = |err: std::io::Error| InventoryError::Output(format!("{}: {}", path.display(), err));
    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(content.as_bytes()).map_err(output_error)?;
    writer.flush().map_err(output_error)?;

    Ok(path.to_path_buf())
}
