use crate::cli::ProcessCommand;
use crate::context::Context;
use crate::error::Result;
use clap::Args;
use std::fmt::Debug;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Add title (Required)
    #[arg(long, short = 't')]
    pub title: String,
    /// Content for the task, defaults to a placeholder when omitted
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}

impl ProcessCommand for AddArgs {
    fn process_command(&self, context: &mut Context) -> Result<()> {
        let task = context.store_mut().add(&self.title, self.content.clone())?;

        println!(
            "Task added:\nID:\t{}\nTitle:\t{}\nContent:\t{}",
            task.id, task.title, task.content
        );

        Ok(())
    }
}
