//! Command handlers that delegate to the settings service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `SettingsService` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT touch stores directly or contain business logic.

pub mod paths;
pub mod settings;
