//! The `check` command: expand units without writing anything.

use super::{no_units_error, select_units};
use crate::cli::CheckArgs;
use crate::context::ProjectContext;
use crate::discover::discover_units;
use crate::error::{Result, SeamError};
use crate::expand::expand_template;
use std::fs;

/// Dry-run expansion of every selected unit.
///
/// Exercises the same discovery and expansion as `build` so that broken
/// includes or unreadable entries fail identically, but never touches
/// the output directory.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let ctx = ProjectContext::resolve(args.root.as_deref())?;
    let units = select_units(&ctx, discover_units(&ctx)?, &args.units)?;

    if units.is_empty() {
        return Err(no_units_error(&ctx));
    }

    for unit in &units {
        let content = fs::read_to_string(&unit.entry_path)
            .map_err(|e| SeamError::read(&unit.entry_path, e))?;
        expand_template(&unit.entry_path, &content)?;

        println!("Checked: {}", unit.name);
    }

    Ok(())
}
