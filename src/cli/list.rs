use crate::cli::ProcessCommand;
use crate::context::Context;
use crate::error::Result;
use crate::store::Task;
use clap::Args;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use std::fmt::Debug;

/// Title and content are truncated to this many characters in the table.
const DISPLAY_WIDTH: usize = 10;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Find and print a task by ID
    #[arg(long, short = 'i', default_value_t = 0)]
    pub id: u32,
}

impl ProcessCommand for ListArgs {
    fn process_command(&self, context: &mut Context) -> Result<()> {
        // 0 is the "no specific task" sentinel, meaning show all.
        if self.id != 0 {
            match context.store().get(self.id) {
                Some(task) => print_task(task),
                None => println!("Task with ID {} not found.", self.id),
            }
        } else {
            print_task_table(context.store().list());
        }

        Ok(())
    }
}

fn print_task(task: &Task) {
    let status = if task.is_done {
        "completed"
    } else {
        "not completed"
    };
    println!("{}: {}", task.title.bold(), status.dimmed());
    println!("{}", task.content.on_black());
}

fn truncated(field: &str) -> String {
    if field.chars().count() > DISPLAY_WIDTH {
        let head: String = field.chars().take(DISPLAY_WIDTH).collect();
        format!("{}...", head)
    } else {
        field.to_string()
    }
}

fn print_task_table(tasks: &[Task]) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    // Add a row with column headers
    table.add_row(Row::new(vec![
        Cell::new("ID").style_spec("bFg"),
        Cell::new("Title").style_spec("bFg"),
        Cell::new("Content").style_spec("bFg"),
        Cell::new("Completed").style_spec("bFg"),
    ]));

    for task in tasks {
        let status = if task.is_done {
            "completed".strikethrough().to_string()
        } else {
            "not completed".to_string()
        };
        table.add_row(Row::new(vec![
            Cell::new(&task.id.to_string()),
            Cell::new(&truncated(&task.title)),
            Cell::new(&truncated(&task.content)),
            Cell::new(&status),
        ]));
    }

    // Print the table to stdout
    table.printstd();
}
