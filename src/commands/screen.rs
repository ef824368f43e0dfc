use std::io::Write;
use crate::error::InventoryError;

const RULE: &str = "------------------------------------------------------------------";

pub(crate) fn show_header<W: Write>(out: &mut W) -> Result<(), InventoryError> {
    writeln!(out)?;
    writeln!(out, "Chef VM Inventory v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

pub(crate) fn show_subheader<W: Write>(out: &mut W, subtext: &str) -> Result<(), InventoryError> {
    writeln!(out, "{}", subtext)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn show_stage<W: Write>(out: &mut W, subtext: &str) -> Result<(), InventoryError> {
    show_header(out)?;
    show_subheader(out, subtext)?;
    writeln!(out, "Please Wait...")?;
    writeln!(out)?;
    Ok(())
}
