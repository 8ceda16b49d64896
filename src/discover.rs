//! Template unit discovery for seam.
//!
//! A template unit is one subdirectory of the templates root that contains
//! the configured entry file. Subdirectories without the entry file are not
//! units and are skipped silently; loose files in the templates root are
//! ignored. Any other read failure aborts the run.

use crate::context::ProjectContext;
use crate::error::{Result, SeamError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One discovered template unit.
///
/// Units are discovered at the start of a run and are immutable; they are
/// not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUnit {
    /// The unit name, taken from its containing directory.
    pub name: String,

    /// Path to the unit's entry file.
    pub entry_path: PathBuf,

    /// Directory against which the entry file's relative includes resolve.
    pub base_dir: PathBuf,
}

/// Enumerate the template units under the context's templates root.
///
/// Returns units sorted by name so console output is stable across
/// platforms. The order units build in carries no semantics; each unit's
/// expansion is fully independent.
///
/// # Errors
///
/// * `SeamError::ReadError` - The templates root or one of its entries
///   could not be read (missing root, permission denied, etc.). A missing
///   *entry file* inside a candidate directory is not an error.
pub fn discover_units(ctx: &ProjectContext) -> Result<Vec<TemplateUnit>> {
    let entries = fs::read_dir(&ctx.templates_dir)
        .map_err(|e| SeamError::read(&ctx.templates_dir, e))?;

    let mut units = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| SeamError::read(&ctx.templates_dir, e))?;

        let file_type = entry
            .file_type()
            .map_err(|e| SeamError::read(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }

        // Unit names come from directory names; a non-UTF-8 name can't be
        // mapped to an output path, so it can't be a unit.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        let base_dir = entry.path();
        let entry_path = base_dir.join(&ctx.config.entry_file);

        match fs::metadata(&entry_path) {
            Ok(_) => units.push(TemplateUnit {
                name,
                entry_path,
                base_dir,
            }),
            // No entry file: this directory is not a template unit.
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(SeamError::read(entry_path, e)),
        }
    }

    units.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(units)
}
