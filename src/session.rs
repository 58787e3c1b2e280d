//! Session file carrying an [`EphemeralStore`] between commands

use crate::error::Result;
use crate::models::List;
use crate::store::EphemeralStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// On-disk shape of a session
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(default)]
    lists: Vec<List>,
}

/// JSON file holding the lists of one session
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the session. A missing file is an empty session
    pub fn load(&self) -> Result<EphemeralStore> {
        let data = match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str::<SessionData>(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => SessionData::default(),
            Err(e) => return Err(e.into()),
        };
        debug!(
            path = %self.path.display(),
            lists = data.lists.len(),
            "loaded session"
        );
        Ok(EphemeralStore::from_lists(data.lists))
    }

    pub fn save(&self, store: &EphemeralStore) -> Result<()> {
        let data = SessionData {
            lists: store.lists(),
        };
        // Write beside the target, then rename over it
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(&data)?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        debug!(
            path = %self.path.display(),
            lists = data.lists.len(),
            "saved session"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::TodoStore;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_session() {
        let temp = TempDir::new().unwrap();
        let session = SessionFile::new(temp.path().join("session.json"));

        let mut store = session.load().unwrap();
        assert!(store.all_lists().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let session = SessionFile::new(temp.path().join("session.json"));

        let mut store = session.load().unwrap();
        let list = store.create_list("Groceries").unwrap();
        let todo = store.create_todo(list.id, "Milk").unwrap().unwrap();
        store.set_todo_status(list.id, todo.id, true).unwrap();
        session.save(&store).unwrap();

        let mut reloaded = session.load().unwrap();
        let list = reloaded.find_list(list.id).unwrap();
        assert_eq!(list.name, "Groceries");
        assert!(list.todos[0].completed);

        // Ids continue from the saved state
        let next = reloaded.create_todo(list.id, "Eggs").unwrap().unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_corrupt_file_is_a_backend_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let result = SessionFile::new(&path).load();
        assert!(matches!(result, Err(TodoError::Session(_))));
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "stale contents").unwrap();
        let session = SessionFile::new(&path);

        let mut store = EphemeralStore::new();
        store.create_list("Fresh").unwrap();
        session.save(&store).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let mut reloaded = session.load().unwrap();
        assert_eq!(reloaded.find_list(1).unwrap().name, "Fresh");
    }

    #[test]
    fn test_max_id_in_session_does_not_panic() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(
            &path,
            r#"{"lists":[{"id":9223372036854775807,"name":"X","todos":[]}]}"#,
        )
        .unwrap();

        let mut store = SessionFile::new(&path).load().unwrap();
        let result = store.create_list("Y");
        assert!(matches!(result, Err(TodoError::IdsExhausted(i64::MAX))));
        assert!(!result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_reads_handwritten_session() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(
            &path,
            r#"{"lists":[{"id":3,"name":"Trip","todos":[{"id":1,"name":"Pack","completed":false}]}]}"#,
        )
        .unwrap();

        let mut store = SessionFile::new(&path).load().unwrap();
        let list = store.find_list(3).unwrap();
        assert_eq!(list.todos.len(), 1);
        assert_eq!(store.create_list("Next").unwrap().id, 4);
    }
}
