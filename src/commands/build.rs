//! The `build` command: expand every template unit and write its output.

use super::{no_units_error, select_units};
use crate::cli::BuildArgs;
use crate::context::ProjectContext;
use crate::discover::{discover_units, TemplateUnit};
use crate::error::{Result, SeamError};
use crate::expand::expand_template;
use crate::fs::atomic_write_file;
use std::fs;

/// Run the build: discover units, expand each, write each artifact.
///
/// Units expand independently, in name order, with no shared state.
/// The first fatal error (unreadable entry, missing include, failed
/// write) aborts the run; artifacts already written stay in place.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let ctx = ProjectContext::resolve(args.root.as_deref())?;
    let units = select_units(&ctx, discover_units(&ctx)?, &args.units)?;

    let mut built_any = false;
    for unit in &units {
        build_unit(&ctx, unit)?;
        built_any = true;
    }

    if !built_any {
        return Err(no_units_error(&ctx));
    }

    Ok(())
}

/// Expand one unit and write its output artifact.
fn build_unit(ctx: &ProjectContext, unit: &TemplateUnit) -> Result<()> {
    let content = fs::read_to_string(&unit.entry_path)
        .map_err(|e| SeamError::read(&unit.entry_path, e))?;

    let expanded = expand_template(&unit.entry_path, &content)?;

    let output_path = ctx.output_path(&unit.name);
    atomic_write_file(&output_path, &expanded)?;

    println!("Built: {}", ctx.display_path(&output_path));
    Ok(())
}
