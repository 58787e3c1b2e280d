use serde::{Deserialize, Serialize};

/// A single todo item owned by a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Todo {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// A named list of todos, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl List {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        List {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    pub fn todos_remaining_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// A list is complete once it has todos and none of them are outstanding
    pub fn is_complete(&self) -> bool {
        self.todos_count() > 0 && self.todos_remaining_count() == 0
    }

    pub fn todo(&self, todo_id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }
}
