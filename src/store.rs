use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Placeholder content for tasks created without one.
pub const DEFAULT_CONTENT: &str = "Add a content for your task";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(rename = "isDone", default)]
    pub is_done: bool,
}

/// Fields of an update. `None` means the caller did not supply the field,
/// so an explicit `Some(false)` on `is_done` is applied rather than skipped.
#[derive(Debug, Default, Clone)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_done: Option<bool>,
}

/// Ordered task collection backed by a single JSON file. The file is
/// rewritten in full after every mutation, so memory and disk agree
/// immediately after any successful operation.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Loads the store from `path`. A missing file is initialized to an
    /// empty array; an unparseable file aborts with `Error::CorruptStore`
    /// rather than silently resetting user data.
    pub fn load(path: &Path) -> Result<TaskStore> {
        let tasks = if path.exists() {
            let data = fs::read_to_string(path)?;
            serde_json::from_str::<Vec<Task>>(&data).map_err(|e| {
                Error::CorruptStore(format!("{} is not a task file: {}", path.display(), e))
            })?
        } else {
            fs::write(path, "[]")?;
            Vec::new()
        };

        info!("Loaded {} tasks from {}", tasks.len(), path.display());

        Ok(TaskStore {
            path: path.to_path_buf(),
            tasks,
        })
    }

    /// Appends a new task and persists. The id is the current store length
    /// plus one, which reuses ids once tasks have been deleted.
    pub fn add(&mut self, title: &str, content: Option<String>) -> Result<Task> {
        let task = Task {
            id: self.tasks.len() as u32 + 1,
            title: title.to_string(),
            content: content.unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
            is_done: false,
        };

        self.tasks.push(task.clone());
        self.flush()?;

        info!("Added task {} '{}'", task.id, task.title);
        Ok(task)
    }

    /// Removes the first task with the given id. Deleting an id that is not
    /// present is not an error; the store persists either way.
    pub fn delete(&mut self, id: u32) -> Result<()> {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                info!("Deleted task {}", id);
            }
            None => debug!("Delete of task {} matched nothing", id),
        }
        self.flush()?;

        Ok(())
    }

    /// Applies the supplied fields to the task with the given id and
    /// persists. Fails with `Error::TaskNotFound` if the id is absent.
    pub fn update(&mut self, id: u32, fields: TaskUpdate) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;

        if let Some(title) = fields.title {
            task.title = title;
        }
        if let Some(content) = fields.content {
            task.content = content;
        }
        if let Some(is_done) = fields.is_done {
            task.is_done = is_done;
        }
        let updated = task.clone();

        self.flush()?;

        info!("Updated task {}", id);
        Ok(updated)
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn flush(&self) -> Result<()> {
        let data = serde_json::to_string(&self.tasks)?;
        fs::write(&self.path, data)?;

        debug!("Flushed {} tasks to {}", self.tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, TaskStore) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = TaskStore::load(&dir.path().join("data.json")).expect("failed to load store");
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_creates_empty_store() -> Result<()> {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("data.json");

        // Test
        let store = TaskStore::load(&path)?;

        // Validate
        assert!(store.is_empty());
        assert_eq!("[]", fs::read_to_string(&path)?);

        Ok(())
    }

    #[test]
    fn test_load_existing_file_preserves_order() -> Result<()> {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("data.json");
        // A record without the isDone key defaults to false.
        fs::write(
            &path,
            r#"[{"id":1,"title":"a","content":"x","isDone":true},{"id":2,"title":"b","content":"y"}]"#,
        )?;

        // Test
        let store = TaskStore::load(&path)?;

        // Validate
        assert_eq!(2, store.len());
        assert_eq!("a", store.list()[0].title);
        assert!(store.list()[0].is_done);
        assert_eq!("b", store.list()[1].title);
        assert!(!store.list()[1].is_done);

        Ok(())
    }

    #[test]
    fn test_load_corrupt_file_aborts() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("data.json");
        fs::write(&path, "not json at all").expect("failed to seed file");

        // Test
        let result = TaskStore::load(&path);

        // Validate
        assert!(matches!(result, Err(Error::CorruptStore(_))));
        // The unparseable file is left in place, not reset.
        assert_eq!(
            "not json at all",
            fs::read_to_string(&path).expect("failed to read file")
        );
    }

    #[test]
    fn test_add_assigns_sequential_ids() -> Result<()> {
        let (_dir, mut store) = temp_store();

        // Test
        let first = store.add("Buy milk", None)?;
        let second = store.add("Call mom", Some("re: birthday".to_string()))?;

        // Validate
        assert_eq!(1, first.id);
        assert_eq!(DEFAULT_CONTENT, first.content);
        assert!(!first.is_done);
        assert_eq!(2, second.id);
        assert_eq!("re: birthday", second.content);

        Ok(())
    }

    #[test]
    fn test_add_reuses_id_after_delete() -> Result<()> {
        let (_dir, mut store) = temp_store();
        store.add("Buy milk", None)?;
        store.add("Call mom", Some("re: birthday".to_string()))?;
        store.delete(1)?;

        // Test: ids are count-based, so the next add collides with id 2.
        let task = store.add("Gym", None)?;

        // Validate
        assert_eq!(2, task.id);
        assert_eq!(2, store.len());
        assert_eq!(2, store.list()[0].id);
        assert_eq!(2, store.list()[1].id);

        Ok(())
    }

    #[test]
    fn test_delete_removes_task() -> Result<()> {
        let (dir, mut store) = temp_store();
        store.add("Buy milk", None)?;
        store.add("Call mom", None)?;

        // Test
        store.delete(1)?;

        // Validate
        assert_eq!(1, store.len());
        assert!(store.get(1).is_none());
        let reloaded = TaskStore::load(&dir.path().join("data.json"))?;
        assert_eq!(store.list(), reloaded.list());

        Ok(())
    }

    #[test]
    fn test_delete_missing_id_is_noop() -> Result<()> {
        let (_dir, mut store) = temp_store();
        let task = store.add("Buy milk", None)?;

        // Test
        store.delete(99)?;

        // Validate
        assert_eq!(vec![task], store.list().to_vec());

        Ok(())
    }

    #[test]
    fn test_update_changes_only_supplied_fields() -> Result<()> {
        let (_dir, mut store) = temp_store();
        store.add("Buy milk", Some("2 liters".to_string()))?;

        // Test
        let updated = store.update(
            1,
            TaskUpdate {
                title: Some("Buy oat milk".to_string()),
                ..Default::default()
            },
        )?;

        // Validate
        assert_eq!("Buy oat milk", updated.title);
        assert_eq!("2 liters", updated.content);
        assert!(!updated.is_done);

        Ok(())
    }

    #[test]
    fn test_update_applies_explicit_false() -> Result<()> {
        let (_dir, mut store) = temp_store();
        store.add("Buy milk", None)?;
        store.update(
            1,
            TaskUpdate {
                is_done: Some(true),
                ..Default::default()
            },
        )?;

        // Test: Some(false) is a real update, None leaves the flag alone.
        let updated = store.update(
            1,
            TaskUpdate {
                is_done: Some(false),
                ..Default::default()
            },
        )?;

        // Validate
        assert!(!updated.is_done);

        Ok(())
    }

    #[test]
    fn test_update_missing_id_errors() {
        let (_dir, mut store) = temp_store();

        // Test
        let result = store.update(7, TaskUpdate::default());

        // Validate
        assert!(matches!(result, Err(Error::TaskNotFound(7))));
    }

    #[test]
    fn test_add_then_load_round_trips() -> Result<()> {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("data.json");
        let mut store = TaskStore::load(&path)?;
        let added = store.add("Buy milk", Some("2 liters".to_string()))?;

        // Test: a fresh store sees exactly what add returned.
        let reloaded = TaskStore::load(&path)?;

        // Validate
        assert_eq!(Some(&added), reloaded.get(added.id));

        Ok(())
    }
}
