use crate::error::{Error, Result};
use crate::store::TaskStore;
use std::path::PathBuf;

const DATA_FILE: &str = "data.json";

/// Holds the loaded task store for the lifetime of one invocation. Command
/// handlers receive the context by reference.
pub struct Context {
    store: TaskStore,
}

impl Context {
    pub fn init() -> Result<Self> {
        let data_path = Self::data_dir()?.join(DATA_FILE);
        Self::with_data_file(data_path)
    }

    /// Builds a context against an explicit data file. Used by tests to keep
    /// each store in its own directory.
    pub fn with_data_file(data_path: PathBuf) -> Result<Self> {
        let store = TaskStore::load(&data_path)?;
        Ok(Context { store })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Directory holding the data file (and the log file next to it).
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir: PathBuf;

        if std::env::var("CARGO_MANIFEST_DIR").is_ok() {
            // This works for cargo runs and integration tests
            let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
            data_dir = PathBuf::from(format!("{}/tests/data", manifest_dir));
            std::fs::create_dir_all(&data_dir)?;
        } else {
            // Installed binaries keep the data file next to the executable
            let exe = std::env::current_exe()?;
            let exe_dir = exe.parent().ok_or_else(|| {
                Error::CustomError("Unable to find parent directory of executable".to_string())
            })?;
            data_dir = exe_dir.to_path_buf();
        }

        Ok(data_dir)
    }
}
