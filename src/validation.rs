//! Name validation shared by every store backend
//!
//! Handlers run these checks before calling into a store; stores never
//! re-validate

use crate::error::{Result, TodoError};
use crate::models::List;

/// Maximum length of a list or todo name, in characters
pub const MAX_NAME_LEN: usize = 100;

fn has_valid_length(name: &str) -> bool {
    (1..=MAX_NAME_LEN).contains(&name.chars().count())
}

/// Validate a raw list name against the current lists
///
/// Returns the trimmed name. Length is checked before uniqueness
pub fn validate_list_name(raw: &str, existing: &[List]) -> Result<String> {
    let name = raw.trim();
    if !has_valid_length(name) {
        return Err(TodoError::ListNameLength);
    }
    if existing.iter().any(|list| list.name == name) {
        return Err(TodoError::ListNameTaken);
    }
    Ok(name.to_string())
}

/// Validate a raw todo name. Returns the trimmed name
pub fn validate_todo_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if !has_valid_length(name) {
        return Err(TodoError::TodoNameLength);
    }
    Ok(name.to_string())
}
