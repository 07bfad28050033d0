//! `scotter config`: inspect the tool configuration or write a default file.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.print(&display_value(&value))?;
        }

        ConfigCommands::List => {
            let serialised = toml::to_string_pretty(&config)
                .with_cli_context(|| "Failed to serialise configuration")?;
            output.header("Current Configuration:")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(config_file).display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::active_path(config_file);
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }

            let toml = toml::to_string_pretty(&AppConfig::default())
                .with_cli_context(|| "Failed to serialise default configuration")?;

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, toml)
                .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

/// Strings print bare; everything else as compact JSON.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_print_without_quotes() {
        assert_eq!(display_value(&json!("go")), "go");
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(
            display_value(&json!(["linux", "darwin"])),
            r#"["linux","darwin"]"#
        );
    }

    #[test]
    fn default_config_serialises_to_toml() {
        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[defaults]"));
        assert!(rendered.contains("language = \"go\""));
    }
}
