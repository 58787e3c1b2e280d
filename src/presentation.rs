//! Presentation helpers: completed-last ordering and plain-text views
//!
//! Nothing here touches a store; the ordering is applied to borrowed
//! snapshots only

use crate::models::{List, Todo};
use std::fmt::Write;

/// Anything that can be shown as complete or incomplete
pub trait Completion {
    fn is_complete(&self) -> bool;
}

impl Completion for Todo {
    fn is_complete(&self) -> bool {
        self.completed
    }
}

impl Completion for List {
    fn is_complete(&self) -> bool {
        List::is_complete(self)
    }
}

/// Stable partition: incomplete items first, complete items last, each group
/// in its original relative order
pub fn completed_last<T: Completion>(items: &[T]) -> Vec<&T> {
    let (complete, incomplete): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| item.is_complete());
    incomplete.into_iter().chain(complete).collect()
}

fn mark(complete: bool) -> &'static str {
    if complete {
        "✓"
    } else {
        "○"
    }
}

/// Render the overview of all lists
pub fn render_lists(lists: &[List]) -> String {
    if lists.is_empty() {
        return "You don't have any todo lists. Create one with `todos new <name>`.\n"
            .to_string();
    }

    let mut out = String::new();
    for list in completed_last(lists) {
        let _ = writeln!(
            out,
            "  [#{:>3}] {} {} ({}/{})",
            list.id,
            mark(list.is_complete()),
            list.name,
            list.todos_remaining_count(),
            list.todos_count()
        );
    }
    out
}

/// Render a single list with its todos
pub fn render_list(list: &List) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", list.name, list.id);

    if list.todos.is_empty() {
        let _ = writeln!(
            out,
            "  No todos yet. Add one with `todos add {} <name>`.",
            list.id
        );
        return out;
    }

    for todo in completed_last(&list.todos) {
        let checkbox = if todo.completed { "[x]" } else { "[ ]" };
        let _ = writeln!(out, "  {checkbox} #{:<3} {}", todo.id, todo.name);
    }
    let _ = writeln!(
        out,
        "\n{} of {} remaining",
        list.todos_remaining_count(),
        list.todos_count()
    );
    out
}
