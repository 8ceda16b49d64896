//! Template expansion for seam.
//!
//! The expander performs exactly one substitution pass over an entry file.
//! Each line either passes through unchanged or, when it matches the
//! include directive, is replaced by the verbatim contents of the
//! referenced file. Included content is never rescanned for directives,
//! so includes do not nest.
//!
//! # Directive syntax
//!
//! ```text
//! <!-- include: path/to/fragment.md -->
//! ```
//!
//! The match is line-anchored and case-sensitive. Leading and trailing
//! whitespace on the line is ignored, and the captured path is trimmed
//! before resolution. Paths resolve relative to the *including file's*
//! directory, not the process working directory, so units can organize
//! their fragments locally. Parent-directory traversal is allowed.

use crate::error::{Result, SeamError};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Line-anchored include directive pattern with a non-greedy path capture.
static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<!--\s*include:\s*(.+?)\s*-->\s*$").expect("Invalid include directive regex")
});

/// Return the include target if `line` is an include directive.
pub fn include_target(line: &str) -> Option<&str> {
    INCLUDE_RE
        .captures(line)
        .map(|caps| caps.get(1).expect("directive regex has one group").as_str())
}

/// Expand one entry file's content into the final output text.
///
/// `entry_path` is the location the content was read from; relative
/// include targets resolve against its parent directory.
///
/// The result contains, per source line, either that line with a trailing
/// `\n`, or the complete content of exactly one included file (with `\n`
/// appended iff the content is non-empty and lacks one). Line order is
/// preserved. Windows line endings in the entry content are normalized
/// to `\n`; included content is spliced in byte-for-byte.
///
/// # Errors
///
/// * `SeamError::ReadError` - An include target could not be read. There
///   is no partial-output fallback; the unit either expands fully or the
///   run fails.
pub fn expand_template(entry_path: &Path, content: &str) -> Result<String> {
    let base_dir = entry_path.parent().unwrap_or(Path::new("."));

    let normalized = content.replace("\r\n", "\n");
    let mut lines: Vec<&str> = normalized.split('\n').collect();

    // A trailing newline produces a final empty element; drop it so the
    // break we append per line doesn't duplicate into a blank last line.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut output = String::with_capacity(normalized.len());

    for line in lines {
        let Some(target) = include_target(line) else {
            output.push_str(line);
            output.push('\n');
            continue;
        };

        let include_path = base_dir.join(target.trim());
        let mut included =
            fs::read_to_string(&include_path).map_err(|e| SeamError::read(include_path, e))?;

        if !included.is_empty() && !included.ends_with('\n') {
            included.push('\n');
        }

        output.push_str(&included);
    }

    Ok(output)
}
