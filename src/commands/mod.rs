//! Command implementations for seam.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the unit-selection helper shared by `build`
//! and `check`.

mod build;
mod check;
mod list;

use crate::cli::Command;
use crate::context::ProjectContext;
use crate::discover::TemplateUnit;
use crate::error::{Result, SeamError};

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build::cmd_build(args),
        Command::Check(args) => check::cmd_check(args),
        Command::List(args) => list::cmd_list(args),
    }
}

/// Restrict discovered units to the requested names.
///
/// An empty request selects every discovered unit. Requesting a name that
/// did not qualify as a unit is a user error, whether the directory is
/// missing entirely or just lacks the entry file.
pub(crate) fn select_units(
    ctx: &ProjectContext,
    units: Vec<TemplateUnit>,
    requested: &[String],
) -> Result<Vec<TemplateUnit>> {
    if requested.is_empty() {
        return Ok(units);
    }

    for name in requested {
        if !units.iter().any(|u| &u.name == name) {
            return Err(SeamError::UserError(format!(
                "unknown template unit '{}' (no {}/{}/{} found)",
                name, ctx.config.templates_dir, name, ctx.config.entry_file
            )));
        }
    }

    Ok(units
        .into_iter()
        .filter(|u| requested.contains(&u.name))
        .collect())
}

/// The error raised when full enumeration produced nothing to build.
pub(crate) fn no_units_error(ctx: &ProjectContext) -> SeamError {
    SeamError::NoUnitsBuilt {
        templates_dir: ctx.config.templates_dir.clone(),
        entry_file: ctx.config.entry_file.clone(),
    }
}
