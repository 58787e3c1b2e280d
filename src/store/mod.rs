//! Persistence abstraction for lists and todos
//!
//! Both backends satisfy the same contract:
//! - `find_list` is the only operation that reports a missing id, as
//!   [`TodoError::ListNotFound`](crate::error::TodoError::ListNotFound)
//! - deletes and updates on missing ids are silent no-ops
//! - names are stored as given; validation happens before the call

mod ephemeral;
mod relational;

pub use ephemeral::EphemeralStore;
pub use relational::RelationalStore;

use crate::error::Result;
use crate::models::{List, Todo};

/// CRUD operations on lists and their todos
pub trait TodoStore {
    /// Load a list with its todos
    fn find_list(&mut self, id: i64) -> Result<List>;

    /// All lists with their todos, in ascending id order
    fn all_lists(&mut self) -> Result<Vec<List>>;

    /// Create an empty list. Name uniqueness is the caller's concern
    fn create_list(&mut self, name: &str) -> Result<List>;

    /// Delete a list together with all of its todos
    fn delete_list(&mut self, id: i64) -> Result<()>;

    fn rename_list(&mut self, id: i64, name: &str) -> Result<()>;

    /// Append a new, incomplete todo. Returns `None` when the list is missing
    fn create_todo(&mut self, list_id: i64, name: &str) -> Result<Option<Todo>>;

    fn delete_todo(&mut self, list_id: i64, todo_id: i64) -> Result<()>;

    fn set_todo_status(&mut self, list_id: i64, todo_id: i64, completed: bool) -> Result<()>;

    /// Mark every todo in the list as completed
    fn complete_all(&mut self, list_id: i64) -> Result<()>;
}
