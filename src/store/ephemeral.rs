use super::TodoStore;
use crate::error::{Result, TodoError};
use crate::models::{List, Todo};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// In-memory store for a single session
///
/// Ids are one more than the largest sibling id, so a gap left by a deleted
/// todo is never refilled unless it was the largest. Concurrent writers on the
/// same session can hand out duplicate ids; nothing here guards against that
#[derive(Debug, Clone, Default)]
pub struct EphemeralStore {
    lists: BTreeMap<i64, List>,
}

impl EphemeralStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a session snapshot. Later duplicates of an id win
    pub fn from_lists(lists: Vec<List>) -> Self {
        let mut by_id = BTreeMap::new();
        for list in lists {
            let id = list.id;
            if let Some(dropped) = by_id.insert(id, list) {
                warn!(
                    list_id = id,
                    name = %dropped.name,
                    "duplicate list id in session, keeping the later one"
                );
            }
        }
        EphemeralStore { lists: by_id }
    }

    /// Owned snapshot of every list, in id order
    pub fn lists(&self) -> Vec<List> {
        self.lists.values().cloned().collect()
    }

    fn list_mut(&mut self, id: i64) -> Option<&mut List> {
        self.lists.get_mut(&id)
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> Result<i64> {
    let max = ids.max().unwrap_or(0);
    max.checked_add(1).ok_or(TodoError::IdsExhausted(max))
}

impl TodoStore for EphemeralStore {
    fn find_list(&mut self, id: i64) -> Result<List> {
        self.lists.get(&id).cloned().ok_or(TodoError::ListNotFound(id))
    }

    fn all_lists(&mut self) -> Result<Vec<List>> {
        Ok(self.lists())
    }

    fn create_list(&mut self, name: &str) -> Result<List> {
        let id = next_id(self.lists.keys().copied())?;
        let list = List::new(id, name);
        self.lists.insert(id, list.clone());
        debug!(list_id = id, "created list");
        Ok(list)
    }

    fn delete_list(&mut self, id: i64) -> Result<()> {
        if self.lists.remove(&id).is_some() {
            debug!(list_id = id, "deleted list");
        }
        Ok(())
    }

    fn rename_list(&mut self, id: i64, name: &str) -> Result<()> {
        if let Some(list) = self.list_mut(id) {
            list.name = name.to_string();
        }
        Ok(())
    }

    fn create_todo(&mut self, list_id: i64, name: &str) -> Result<Option<Todo>> {
        let Some(list) = self.list_mut(list_id) else {
            return Ok(None);
        };
        let todo = Todo::new(next_id(list.todos.iter().map(|t| t.id))?, name);
        list.todos.push(todo.clone());
        debug!(list_id, todo_id = todo.id, "created todo");
        Ok(Some(todo))
    }

    fn delete_todo(&mut self, list_id: i64, todo_id: i64) -> Result<()> {
        if let Some(list) = self.list_mut(list_id) {
            list.todos.retain(|t| t.id != todo_id);
        }
        Ok(())
    }

    fn set_todo_status(&mut self, list_id: i64, todo_id: i64, completed: bool) -> Result<()> {
        if let Some(todo) = self
            .list_mut(list_id)
            .and_then(|list| list.todos.iter_mut().find(|t| t.id == todo_id))
        {
            todo.completed = completed;
        }
        Ok(())
    }

    fn complete_all(&mut self, list_id: i64) -> Result<()> {
        if let Some(list) = self.list_mut(list_id) {
            for todo in &mut list.todos {
                todo.completed = true;
            }
        }
        Ok(())
    }
}
