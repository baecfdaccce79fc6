use crate::cli::ProcessCommand;
use crate::context::Context;
use crate::error::Result;
use clap::Args;
use std::fmt::Debug;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// The ID of the task to remove (Required)
    #[arg(long)]
    pub id: u32,
}

impl ProcessCommand for DeleteArgs {
    fn process_command(&self, context: &mut Context) -> Result<()> {
        // Deleting an absent id is a no-op, so there is nothing to report.
        context.store_mut().delete(self.id)?;

        Ok(())
    }
}
