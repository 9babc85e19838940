//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No form logic lives here: entity field
//! arguments stay raw strings so the core binder is the single place where
//! parsing and validation happen.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "salesdesk",
    bin_name = "salesdesk",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Seller and department records, minus the spreadsheet",
    long_about = "Salesdesk manages seller and department records through \
                  validated forms, backed by a JSON record store.",
    after_help = "EXAMPLES:\n\
        \x20 salesdesk department add --name Sales\n\
        \x20 salesdesk seller add --name Alice --email alice@x.com \\\n\
        \x20     --birth-date 01/01/1980 --base-salary 2500.00 --department 1\n\
        \x20 salesdesk seller list --format csv\n\
        \x20 salesdesk completions bash > /usr/share/bash-completion/completions/salesdesk",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage department records.
    #[command(
        visible_alias = "dept",
        about = "Manage department records",
        after_help = "EXAMPLES:\n\
            \x20 salesdesk department add --name Sales\n\
            \x20 salesdesk department update --id 1 --name \"Inside Sales\"\n\
            \x20 salesdesk department list"
    )]
    Department(DepartmentArgs),

    /// Manage seller records.
    #[command(
        about = "Manage seller records",
        after_help = "EXAMPLES:\n\
            \x20 salesdesk seller add --name Alice --email alice@x.com \\\n\
            \x20     --birth-date 01/01/1980 --base-salary 2500.00 --department 1\n\
            \x20 salesdesk seller update --id 7 --name Alice --email alice@y.com \\\n\
            \x20     --birth-date 01/01/1980 --base-salary 2600.00 --department 2\n\
            \x20 salesdesk seller list --format json"
    )]
    Seller(SellerArgs),

    /// Initialise a Salesdesk configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 salesdesk init           # default location\n\
            \x20 salesdesk init --local   # .salesdesk.toml in CWD\n\
            \x20 salesdesk init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Show the effective configuration.
    #[command(about = "Show configuration")]
    Config(ConfigArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 salesdesk completions bash > ~/.local/share/bash-completion/completions/salesdesk\n\
            \x20 salesdesk completions zsh  > ~/.zfunc/_salesdesk\n\
            \x20 salesdesk completions fish > ~/.config/fish/completions/salesdesk.fish"
    )]
    Completions(CompletionsArgs),
}

// ── Department ────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    pub action: DepartmentAction,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentAction {
    /// Add a new department.
    Add {
        /// Department name.
        #[arg(long)]
        name: String,
    },
    /// Update an existing department.
    Update {
        /// Id of the record to update.
        #[arg(long)]
        id: String,
        /// Department name.
        #[arg(long)]
        name: String,
    },
    /// List all departments.
    List {
        /// Listing format.
        #[arg(long, value_enum, default_value = "table")]
        format: ListFormat,
    },
}

// ── Seller ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SellerArgs {
    #[command(subcommand)]
    pub action: SellerAction,
}

/// Raw seller form fields, shared by add and update.
///
/// Everything is a string on purpose: values flow into the form binder
/// unparsed, so a typo in `--base-salary` becomes a field-level validation
/// message instead of an argument-parse failure. Omitted flags submit an
/// empty field on add and keep the stored value on update.
#[derive(Debug, Args)]
pub struct SellerFields {
    /// Seller name.
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Birth date, in the configured date format (default dd/MM/yyyy).
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Base salary, decimal point notation.
    #[arg(long)]
    pub base_salary: Option<String>,

    /// Department id, as shown by `salesdesk department list`.
    #[arg(long)]
    pub department: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SellerAction {
    /// Add a new seller.
    Add {
        #[command(flatten)]
        fields: SellerFields,
    },
    /// Update an existing seller.
    Update {
        /// Id of the record to update.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: SellerFields,
    },
    /// List all sellers.
    List {
        /// Listing format.
        #[arg(long, value_enum, default_value = "table")]
        format: ListFormat,
    },
}

// ── Shared value enums and leaf args ──────────────────────────────────────────

/// How list output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    /// Aligned human-readable table.
    Table,
    /// JSON array to stdout.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.salesdesk.toml` into the current directory instead of the
    /// platform config dir.
    #[arg(long)]
    pub local: bool,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Print only the configuration file path.
    #[arg(long)]
    pub path: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
