//! Implementation of the `salesdesk config` command.

use crate::{
    cli::ConfigArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ConfigArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.path {
        output.print(&AppConfig::config_path().display().to_string())?;
        return Ok(());
    }

    let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: "cannot render effective configuration".into(),
        source: Some(Box::new(e)),
    })?;

    output.header("Effective configuration:")?;
    output.print(&rendered)?;
    Ok(())
}
