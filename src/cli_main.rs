use clap::Parser;
use tasks_clilib::cli::{CliArgs, Commands, ProcessCommand};
use tasks_clilib::context::Context;
use tasks_clilib::error::Result;
use tasks_clilib::logger::system_logger;

fn main() -> Result<()> {
    // Parse CLI arguments first, so usage errors never touch the store.
    let args = CliArgs::parse();

    system_logger(&Context::data_dir()?, "info")?;

    // Initialize the Context, which loads the persisted store.
    let mut context = Context::init()?;

    // No subcommand means list everything.
    let command = args.command.unwrap_or_else(Commands::default_command);
    command.process_command(&mut context)?;

    Ok(())
}
