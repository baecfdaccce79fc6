use crate::cli::ProcessCommand;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::store::TaskUpdate;
use clap::Args;
use std::fmt::Debug;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// The ID of the task to update (Required)
    #[arg(long)]
    pub id: u32,
    /// New title for the task
    #[arg(long, short = 't')]
    pub title: Option<String>,
    /// New content for the task
    #[arg(long, short = 'c')]
    pub content: Option<String>,
    /// Set task completion status (true/false)
    #[arg(long = "isDone", short = 'd')]
    pub is_done: Option<bool>,
}

impl ProcessCommand for UpdateArgs {
    fn process_command(&self, context: &mut Context) -> Result<()> {
        let fields = TaskUpdate {
            title: self.title.clone(),
            content: self.content.clone(),
            is_done: self.is_done,
        };

        // A missing id is informational, not a failed invocation.
        match context.store_mut().update(self.id, fields) {
            Ok(_) => println!("Task {} updated successfully.", self.id),
            Err(Error::TaskNotFound(id)) => println!("Task with ID {} not found.", id),
            Err(e) => return Err(e),
        }

        Ok(())
    }
}
