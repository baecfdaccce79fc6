pub mod cli;
pub mod context;
pub mod error;
pub mod logger;
pub mod store;

pub use cli::{CliArgs, Commands, ProcessCommand};
pub use error::{Error, Result};
pub use store::{Task, TaskStore, TaskUpdate};
