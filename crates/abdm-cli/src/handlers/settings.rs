//! Settings command handler.

use std::time::Duration;

use anyhow::Result;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::warn;

use abdm_core::{FieldName, SettingsService, decode};

use crate::bootstrap::CliContext;
use crate::config_commands::SettingsCommand;
use crate::presentation::format_settings;
use crate::utils::input::prompt_confirmation;

/// How often `watch` re-reads the store for changes made by other processes.
const WATCH_RELOAD_INTERVAL: Duration = Duration::from_secs(1);

/// Execute a settings subcommand.
pub async fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            println!("Current application settings ({:?} backend):", ctx.backend);
            print!("{}", format_settings(&ctx.settings().snapshot()));
            Ok(())
        }
        SettingsCommand::Get { key } => {
            let field: FieldName = key.parse()?;
            println!("{}", field.display_value(&ctx.settings().snapshot()));
            Ok(())
        }
        SettingsCommand::Set { key, value } => {
            let field: FieldName = key.parse()?;
            let updated = ctx.settings().set_by_name(field, &value).await?;
            println!("✓ {field} = {}", field.display_value(&updated));
            Ok(())
        }
        SettingsCommand::Reset { force } => {
            if !force {
                let confirm = prompt_confirmation(
                    "Are you sure you want to reset all settings to defaults?",
                )?;
                if !confirm {
                    println!("Reset cancelled.");
                    return Ok(());
                }
            }

            ctx.settings().reset().await?;
            println!("✓ All settings have been reset to defaults.");
            Ok(())
        }
        SettingsCommand::Watch { key } => {
            let field: FieldName = key.parse()?;
            watch(ctx.settings(), field).await
        }
    }
}

/// Print `field` now and after every change until Ctrl-C.
async fn watch(service: &SettingsService, field: FieldName) -> Result<()> {
    let mut values = field_values(service, field);
    let mut reload = tokio::time::interval(WATCH_RELOAD_INTERVAL);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            next = values.next() => match next {
                Some(value) => println!("{field} = {value}"),
                None => break,
            },
            _ = reload.tick() => {
                if let Err(e) = service.reload().await {
                    warn!(error = %e, "Failed to reload settings");
                }
            }
        }
    }
    Ok(())
}

/// Rendered values of `field`, starting with the current one.
///
/// Repeated values are dropped.
pub fn field_values(
    service: &SettingsService,
    field: FieldName,
) -> impl Stream<Item = String> + Unpin + Send + 'static {
    let mut last: Option<String> = None;
    WatchStream::new(service.subscribe()).filter_map(move |doc| {
        let value = field.display_value(&decode(&doc));
        if last.as_deref() == Some(value.as_str()) {
            None
        } else {
            last = Some(value.clone());
            Some(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use abdm_db::JsonFileSettingsStore;
    use tempfile::TempDir;

    use crate::bootstrap::bootstrap_with;
    use crate::parser::Backend;

    async fn context(dir: &TempDir) -> CliContext {
        let store = Arc::new(JsonFileSettingsStore::new(dir.path().join("settings.json")));
        bootstrap_with(store, Backend::Json).await.unwrap()
    }

    #[tokio::test]
    async fn test_set_persists_value() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir).await;

        execute(
            &ctx,
            SettingsCommand::Set {
                key: "threadCount".to_string(),
                value: "12".to_string(),
            },
        )
        .await
        .unwrap();

        let reopened = context(&dir).await;
        assert_eq!(
            FieldName::ThreadCount.display_value(&reopened.settings().snapshot()),
            "12"
        );
    }

    #[tokio::test]
    async fn test_set_rejects_out_of_range_value() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir).await;

        let result = execute(
            &ctx,
            SettingsCommand::Set {
                key: "browserIntegrationPort".to_string(),
                value: "80".to_string(),
            },
        )
        .await;

        assert!(result.is_err());
        assert_eq!(ctx.settings().snapshot().browser_integration_port, 15151);
    }

    #[tokio::test]
    async fn test_get_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir).await;

        let err = execute(
            &ctx,
            SettingsCommand::Get {
                key: "colour".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(crate::CliError::from_anyhow(&err).exit_code(), 2);
    }

    #[tokio::test]
    async fn test_forced_reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir).await;
        ctx.settings()
            .set_by_name(FieldName::Theme, "light")
            .await
            .unwrap();

        execute(&ctx, SettingsCommand::Reset { force: true })
            .await
            .unwrap();
        assert_eq!(ctx.settings().snapshot().theme, "dark");
    }

    #[tokio::test]
    async fn test_field_values_follow_changes() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir).await;
        let mut values = field_values(ctx.settings(), FieldName::SpeedLimit);

        assert_eq!(values.next().await.as_deref(), Some("0"));

        ctx.settings()
            .set_by_name(FieldName::Theme, "light")
            .await
            .unwrap();
        ctx.settings()
            .set_by_name(FieldName::SpeedLimit, "4096")
            .await
            .unwrap();

        let next = tokio::time::timeout(Duration::from_secs(1), values.next())
            .await
            .unwrap();
        assert_eq!(next.as_deref(), Some("4096"));
    }
}
