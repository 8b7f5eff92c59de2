//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use abdm_core::paths::ResolvedPaths;

/// Execute the paths command.
///
/// Resolves and displays all paths used by ABDM in `key = value` format.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
