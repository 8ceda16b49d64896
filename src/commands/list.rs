//! The `list` command: show discovered template units.

use crate::cli::ListArgs;
use crate::context::ProjectContext;
use crate::discover::{discover_units, TemplateUnit};
use crate::error::{Result, SeamError};
use serde_json::json;

/// List discovered units, either human-readable or as JSON.
///
/// Listing is informational: an empty project prints a notice and exits
/// zero rather than failing the way `build` does.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let ctx = ProjectContext::resolve(args.root.as_deref())?;
    let units = discover_units(&ctx)?;

    if args.json {
        let payload = json_payload(&ctx, &units);
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| SeamError::UserError(format!("failed to serialize unit list: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if units.is_empty() {
        println!(
            "No template units found under {}/",
            ctx.config.templates_dir
        );
        return Ok(());
    }

    for unit in &units {
        println!("{}  ({})", unit.name, ctx.display_path(&unit.entry_path));
    }

    Ok(())
}

/// JSON shape for `list --json`: an array of unit objects.
fn json_payload(ctx: &ProjectContext, units: &[TemplateUnit]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = units
        .iter()
        .map(|unit| {
            json!({
                "name": unit.name,
                "entry": ctx.display_path(&unit.entry_path),
                "output": ctx.display_path(&ctx.output_path(&unit.name)),
            })
        })
        .collect();

    json!(entries)
}
