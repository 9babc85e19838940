//! Implementation of the `salesdesk seller` subcommands.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::debug;

use salesdesk_adapters::JsonFileStore;
use salesdesk_core::application::{
    SellerFormService,
    ports::{DepartmentGateway, SellerGateway},
};
use salesdesk_core::domain::{EntityId, FormatConfig, Seller, SellerFieldValues};

use crate::{
    cli::{GlobalArgs, ListFormat, SellerAction, SellerArgs, SellerFields},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: SellerArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format_config = config.format_config();
    let store = JsonFileStore::open(config.storage.path)?;

    match args.action {
        SellerAction::Add { fields } => add(store, fields, &format_config, output),
        SellerAction::Update { id, fields } => {
            let parsed = EntityId::from_str(&id).map_err(|_| CliError::InvalidInput {
                message: format!("--id must be a positive integer, got '{id}'"),
            })?;
            update(store, parsed, fields, &format_config, output)
        }
        SellerAction::List { format } => list(&store, format, &format_config, output),
    }
}

fn build_form(store: JsonFileStore) -> SellerFormService {
    let mut form = SellerFormService::new(Box::new(store.clone()), Box::new(store));
    form.subscribe(|| debug!("seller records changed"));
    form
}

fn add(
    store: JsonFileStore,
    fields: SellerFields,
    format_config: &FormatConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut form = build_form(store);

    // A blank form: omitted flags submit empty fields and fail validation
    // the same way untouched form controls would. The department flag is a
    // selection into the candidate list; lenient parse, because "no usable
    // selection" is the binder's case to report.
    let values = SellerFieldValues {
        id: String::new(),
        name: fields.name.unwrap_or_default(),
        email: fields.email.unwrap_or_default(),
        birth_date: fields.birth_date.unwrap_or_default(),
        base_salary: fields.base_salary.unwrap_or_default(),
        department: fields
            .department
            .as_deref()
            .and_then(EntityId::parse_lenient),
    };

    save(&mut form, values, format_config, output)
}

fn update(
    store: JsonFileStore,
    id: EntityId,
    fields: SellerFields,
    format_config: &FormatConfig,
    output: OutputManager,
) -> CliResult<()> {
    let existing = SellerGateway::find_all(&store)?
        .into_iter()
        .find(|s| s.id() == Some(id))
        .ok_or(CliError::RecordNotFound { kind: "seller", id })?;

    let mut form = build_form(store);
    form.set_entity(existing);

    // Pre-fill from the stored record, then overlay only what the user
    // passed, exactly like an edit form opened with the record loaded.
    let mut values = form.field_values(format_config)?;
    if let Some(name) = fields.name {
        values.name = name;
    }
    if let Some(email) = fields.email {
        values.email = email;
    }
    if let Some(birth_date) = fields.birth_date {
        values.birth_date = birth_date;
    }
    if let Some(base_salary) = fields.base_salary {
        values.base_salary = base_salary;
    }
    if let Some(department) = fields.department {
        values.department = EntityId::parse_lenient(&department);
    }

    save(&mut form, values, format_config, output)
}

fn save(
    form: &mut SellerFormService,
    values: SellerFieldValues,
    format_config: &FormatConfig,
    output: OutputManager,
) -> CliResult<()> {
    let stored = form.save(&values, format_config)?;

    let id = stored.id().map(|i| i.get()).unwrap_or_default();
    output.success(&format!("Seller saved (id {id})"))?;
    Ok(())
}

fn list(
    store: &JsonFileStore,
    format: ListFormat,
    format_config: &FormatConfig,
    output: OutputManager,
) -> CliResult<()> {
    let sellers: Vec<Seller> = SellerGateway::find_all(store)?;

    // Non-owning reference: resolve department names through a lookup table
    // instead of embedding them in the record.
    let department_names: HashMap<EntityId, String> = DepartmentGateway::find_all(store)?
        .into_iter()
        .filter_map(|d| d.id().map(|id| (id, d.name().to_string())))
        .collect();
    let department_name = |seller: &Seller| {
        department_names
            .get(&seller.department_id())
            .map(String::as_str)
            .unwrap_or("(unknown)")
            .to_string()
    };

    match format {
        ListFormat::Table => {
            output.header("Sellers:")?;
            for seller in &sellers {
                output.print(&format!(
                    "  {:>4}  {:<20}  {:<25}  {:>10}  {:>10}  {}",
                    seller.id().map(|i| i.get()).unwrap_or_default(),
                    seller.name(),
                    seller.email(),
                    format_config.format_date(seller.birth_date()),
                    format_config.format_salary(seller.base_salary()),
                    department_name(seller),
                ))?;
            }
            if sellers.is_empty() {
                output.info("No sellers stored yet")?;
            }
        }
        ListFormat::Json => {
            // Serialise straight to stdout (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&sellers).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        ListFormat::Csv => {
            println!("id,name,email,birth_date,base_salary,department");
            for seller in &sellers {
                println!(
                    "{},{},{},{},{},{}",
                    seller.id().map(|i| i.get()).unwrap_or_default(),
                    seller.name(),
                    seller.email(),
                    format_config.format_date(seller.birth_date()),
                    format_config.format_salary(seller.base_salary()),
                    department_name(seller),
                );
            }
        }
    }

    Ok(())
}
