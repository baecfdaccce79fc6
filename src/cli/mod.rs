pub mod add;
pub mod delete;
pub mod list;
pub mod update;

use crate::context::Context;
use crate::error::Result;
use add::AddArgs;
use clap::{Parser, Subcommand};
use delete::DeleteArgs;
use list::ListArgs;
use std::fmt::Debug;
use update::UpdateArgs;

/// Trait for processing commands
pub trait ProcessCommand {
    fn process_command(&self, context: &mut Context) -> Result<()>;
}

#[derive(Debug, Parser)]
#[command(name = "tasks", version, about = "Track short tasks from the command line")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add(AddArgs),
    /// Remove a task by ID.
    Delete(DeleteArgs),
    /// Update a task by ID.
    Update(UpdateArgs),
    /// Print all tasks or a specific task by ID.
    List(ListArgs),
}

impl Commands {
    /// Command run when none is given on the command line: list everything.
    pub fn default_command() -> Commands {
        Commands::List(ListArgs { id: 0 })
    }
}

impl ProcessCommand for Commands {
    fn process_command(&self, context: &mut Context) -> Result<()> {
        match self {
            Commands::Add(args) => args.process_command(context),
            Commands::Delete(args) => args.process_command(context),
            Commands::Update(args) => args.process_command(context),
            Commands::List(args) => args.process_command(context),
        }
    }
}
