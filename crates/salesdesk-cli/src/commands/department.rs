//! Implementation of the `salesdesk department` subcommands.

use std::str::FromStr;

use tracing::debug;

use salesdesk_adapters::JsonFileStore;
use salesdesk_core::application::{DepartmentFormService, ports::DepartmentGateway};
use salesdesk_core::domain::{Department, DepartmentFieldValues, EntityId};

use crate::{
    cli::{DepartmentAction, DepartmentArgs, GlobalArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: DepartmentArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = JsonFileStore::open(config.storage.path)?;

    match args.action {
        DepartmentAction::Add { name } => save(store, String::new(), name, output),
        DepartmentAction::Update { id, name } => {
            let parsed = EntityId::from_str(&id).map_err(|_| CliError::InvalidInput {
                message: format!("--id must be a positive integer, got '{id}'"),
            })?;
            ensure_exists(&store, parsed)?;
            save(store, id, name, output)
        }
        DepartmentAction::List { format } => list(&store, format, output),
    }
}

fn save(
    store: JsonFileStore,
    id: String,
    name: String,
    output: OutputManager,
) -> CliResult<()> {
    let mut form = DepartmentFormService::new(Box::new(store));
    form.subscribe(|| debug!("department records changed"));

    let values = DepartmentFieldValues { id, name };
    let stored = form.save(&values)?;

    // The save path guarantees an id on the stored record.
    let id = stored.id().map(|i| i.get()).unwrap_or_default();
    output.success(&format!("Department saved (id {id})"))?;
    Ok(())
}

fn ensure_exists(store: &JsonFileStore, id: EntityId) -> CliResult<()> {
    let known = store.find_all()?;
    if known.iter().any(|d| d.id() == Some(id)) {
        Ok(())
    } else {
        Err(CliError::RecordNotFound {
            kind: "department",
            id,
        })
    }
}

fn list(store: &JsonFileStore, format: ListFormat, output: OutputManager) -> CliResult<()> {
    let departments: Vec<Department> = store.find_all()?;

    match format {
        ListFormat::Table => {
            output.header("Departments:")?;
            for department in &departments {
                output.print(&format!(
                    "  {:>4}  {}",
                    department.id().map(|i| i.get()).unwrap_or_default(),
                    department.name()
                ))?;
            }
            if departments.is_empty() {
                output.info("No departments stored yet")?;
            }
        }
        ListFormat::Json => {
            // Serialise straight to stdout (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&departments).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        ListFormat::Csv => {
            println!("id,name");
            for department in &departments {
                println!(
                    "{},{}",
                    department.id().map(|i| i.get()).unwrap_or_default(),
                    department.name()
                );
            }
        }
    }

    Ok(())
}
