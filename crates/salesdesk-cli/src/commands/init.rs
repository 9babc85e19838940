//! Implementation of the `salesdesk init` command.

use std::fs;
use std::path::PathBuf;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: InitArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let path = if args.local {
        PathBuf::from(".salesdesk.toml")
    } else {
        AppConfig::config_path()
    };

    if path.exists() && !args.force {
        return Err(CliError::ConfigError {
            message: format!(
                "config file already exists at {} (use --force to overwrite)",
                path.display()
            ),
            source: None,
        });
    }

    let rendered = toml::to_string_pretty(&AppConfig::default()).map_err(|e| {
        CliError::ConfigError {
            message: "cannot render default configuration".into(),
            source: Some(Box::new(e)),
        }
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&path, rendered)?;

    output.success(&format!("Wrote default config to {}", path.display()))?;
    Ok(())
}
