//! Implementation of the `salesdesk completions` command.

use std::io;

use clap::CommandFactory;

use crate::{
    cli::{Cli, CompletionsArgs},
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "salesdesk", &mut io::stdout());
    Ok(())
}
