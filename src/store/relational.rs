use super::TodoStore;
use crate::error::{Result, TodoError};
use crate::models::{List, Todo};
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::fmt::Debug;
use std::path::Path;
use tracing::{debug, info};

/// SQLite-backed store
///
/// Lists and todos live in two tables; todo ids come from AUTOINCREMENT and
/// are therefore unique across all lists and never reused
pub struct RelationalStore {
    conn: Connection,
}

impl RelationalStore {
    /// Open (or create) the database at `path` and make sure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "opening database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let store = RelationalStore { conn };
        store.create_tables()?;
        Ok(store)
    }

    fn create_tables(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT 0,
                list_id INTEGER NOT NULL REFERENCES lists(id)
            );
            CREATE INDEX IF NOT EXISTS idx_todos_list_id ON todos(list_id);",
        )?;
        Ok(())
    }

    /// Close the connection, surfacing any error from SQLite
    ///
    /// Dropping the store also closes it; this just reports failures
    pub fn disconnect(self) -> Result<()> {
        debug!("closing database");
        self.conn.close().map_err(|(_, e)| TodoError::Db(e))
    }

    fn execute<P: Params + Debug>(&self, sql: &str, params: P) -> Result<usize> {
        info!("{sql}: {params:?}");
        Ok(self.conn.execute(sql, params)?)
    }

    fn load_todos(&self, list_id: i64) -> Result<Vec<Todo>> {
        let sql = "SELECT id, name, completed FROM todos WHERE list_id = ?1 ORDER BY id";
        info!("{sql}: {:?}", [list_id]);
        let mut stmt = self.conn.prepare(sql)?;
        let todos = stmt.query_map([list_id], todo_from_row)?;
        todos
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }

    fn with_todos(&self, (id, name): (i64, String)) -> Result<List> {
        Ok(List {
            id,
            name,
            todos: self.load_todos(id)?,
        })
    }
}

impl TodoStore for RelationalStore {
    fn find_list(&mut self, id: i64) -> Result<List> {
        let sql = "SELECT id, name FROM lists WHERE id = ?1";
        info!("{sql}: {:?}", [id]);
        let row = self
            .conn
            .query_row(sql, [id], list_from_row)
            .optional()?
            .ok_or(TodoError::ListNotFound(id))?;
        self.with_todos(row)
    }

    fn all_lists(&mut self) -> Result<Vec<List>> {
        let sql = "SELECT id, name FROM lists ORDER BY id";
        info!("{sql}: []");
        let rows = {
            let mut stmt = self.conn.prepare(sql)?;
            let rows = stmt.query_map([], list_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };

        // One query per list for its todos
        rows.into_iter().map(|row| self.with_todos(row)).collect()
    }

    fn create_list(&mut self, name: &str) -> Result<List> {
        self.execute("INSERT INTO lists (name) VALUES (?1)", [name])?;
        Ok(List::new(self.conn.last_insert_rowid(), name))
    }

    fn delete_list(&mut self, id: i64) -> Result<()> {
        let sql_todos = "DELETE FROM todos WHERE list_id = ?1";
        let sql_list = "DELETE FROM lists WHERE id = ?1";

        let tx = self.conn.transaction()?;
        info!("{sql_todos}: {:?}", [id]);
        tx.execute(sql_todos, [id])?;
        info!("{sql_list}: {:?}", [id]);
        tx.execute(sql_list, [id])?;
        tx.commit()?;
        Ok(())
    }

    fn rename_list(&mut self, id: i64, name: &str) -> Result<()> {
        self.execute("UPDATE lists SET name = ?1 WHERE id = ?2", (name, id))?;
        Ok(())
    }

    fn create_todo(&mut self, list_id: i64, name: &str) -> Result<Option<Todo>> {
        let inserted = self.execute(
            "INSERT INTO todos (name, list_id) SELECT ?1, id FROM lists WHERE id = ?2",
            (name, list_id),
        )?;
        if inserted == 0 {
            return Ok(None);
        }
        Ok(Some(Todo::new(self.conn.last_insert_rowid(), name)))
    }

    fn delete_todo(&mut self, list_id: i64, todo_id: i64) -> Result<()> {
        self.execute(
            "DELETE FROM todos WHERE list_id = ?1 AND id = ?2",
            (list_id, todo_id),
        )?;
        Ok(())
    }

    fn set_todo_status(&mut self, list_id: i64, todo_id: i64, completed: bool) -> Result<()> {
        self.execute(
            "UPDATE todos SET completed = ?1 WHERE list_id = ?2 AND id = ?3",
            (completed, list_id, todo_id),
        )?;
        Ok(())
    }

    fn complete_all(&mut self, list_id: i64) -> Result<()> {
        self.execute(
            "UPDATE todos SET completed = 1 WHERE list_id = ?1",
            [list_id],
        )?;
        Ok(())
    }
}

// ==================== Row Parsers ====================

fn list_from_row(row: &Row) -> std::result::Result<(i64, String), rusqlite::Error> {
    Ok((row.get(0)?, row.get(1)?))
}

fn todo_from_row(row: &Row) -> std::result::Result<Todo, rusqlite::Error> {
    Ok(Todo {
        id: row.get(0)?,
        name: row.get(1)?,
        completed: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (RelationalStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RelationalStore::open(temp_dir.path().join("todos.db")).unwrap();
        (store, temp_dir)
    }

    fn todo_rows(store: &RelationalStore) -> i64 {
        store
            .conn
            .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_todo_ids_are_global() {
        let (mut store, _temp) = setup();
        let a = store.create_list("A").unwrap();
        let b = store.create_list("B").unwrap();

        let first = store.create_todo(a.id, "x").unwrap().unwrap();
        let second = store.create_todo(b.id, "y").unwrap().unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (mut store, _temp) = setup();
        let list = store.create_list("A").unwrap();
        let todo = store.create_todo(list.id, "x").unwrap().unwrap();

        store.delete_todo(list.id, todo.id).unwrap();
        let again = store.create_todo(list.id, "y").unwrap().unwrap();
        assert!(again.id > todo.id);

        store.delete_list(list.id).unwrap();
        let next = store.create_list("B").unwrap();
        assert!(next.id > list.id);
    }

    #[test]
    fn test_delete_list_leaves_no_orphans() {
        let (mut store, _temp) = setup();
        let list = store.create_list("A").unwrap();
        store.create_todo(list.id, "x").unwrap();
        store.create_todo(list.id, "y").unwrap();
        assert_eq!(todo_rows(&store), 2);

        store.delete_list(list.id).unwrap();
        assert_eq!(todo_rows(&store), 0);
    }

    #[test]
    fn test_failed_cascade_rolls_back() {
        let (mut store, _temp) = setup();
        let list = store.create_list("A").unwrap();
        store.create_todo(list.id, "x").unwrap();

        // Make the second statement of the cascade fail
        store
            .conn
            .execute_batch(
                "CREATE TRIGGER block_list_delete BEFORE DELETE ON lists
                 BEGIN SELECT RAISE(ABORT, 'lists are locked'); END;",
            )
            .unwrap();

        let result = store.delete_list(list.id);
        assert!(matches!(result, Err(TodoError::Db(_))));
        assert_eq!(todo_rows(&store), 1);
        assert_eq!(store.find_list(list.id).unwrap().todos.len(), 1);
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.db");

        let mut store = RelationalStore::open(&path).unwrap();
        let list = store.create_list("Persistent").unwrap();
        store.create_todo(list.id, "remember").unwrap();
        store.disconnect().unwrap();

        let mut store = RelationalStore::open(&path).unwrap();
        let lists = store.all_lists().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Persistent");
        assert_eq!(lists[0].todos[0].name, "remember");
    }

    #[test]
    fn test_todos_load_in_insertion_order() {
        let (mut store, _temp) = setup();
        let list = store.create_list("A").unwrap();
        for name in ["first", "second", "third"] {
            store.create_todo(list.id, name).unwrap();
        }
        store.set_todo_status(list.id, 1, true).unwrap();

        let names: Vec<String> = store
            .find_list(list.id)
            .unwrap()
            .todos
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
