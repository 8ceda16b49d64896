//! CLI argument parsing for seam.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seam: static template assembler that splices include files into entry templates.
///
/// A project is a directory of template units, one per subdirectory of the
/// templates root. Each unit's entry file may reference other files via
/// single-line `<!-- include: path -->` directives; seam resolves those
/// references one level deep and writes one fully assembled document per unit.
#[derive(Parser, Debug)]
#[command(name = "seam")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for seam.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand template units and write their output documents.
    ///
    /// Discovers units under the templates root, expands each entry file's
    /// include directives, and writes one output document per unit.
    /// Fails when zero units were built.
    Build(BuildArgs),

    /// Expand template units without writing anything.
    ///
    /// Performs the same discovery and expansion as `build`, surfacing the
    /// same errors (missing includes, unreadable files), but leaves the
    /// output directory untouched.
    Check(CheckArgs),

    /// List discovered template units.
    ///
    /// Shows each unit's name and entry file. Does not expand anything.
    List(ListArgs),
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Unit names to build. Builds every discovered unit when omitted.
    pub units: Vec<String>,

    /// Project root directory (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Unit names to check. Checks every discovered unit when omitted.
    pub units: Vec<String>,

    /// Project root directory (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Project root directory (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Emit the unit list as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
