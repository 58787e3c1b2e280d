//! Request handling: validate raw input, call the store, render the outcome
//!
//! Every handler receives the store it should use; `run` picks the backend
//! once per command and releases it when the command finishes

use crate::cli::Commands;
use crate::config::{Backend, StoreConfig};
use crate::error::Result;
use crate::presentation;
use crate::session::SessionFile;
use crate::store::{RelationalStore, TodoStore};
use crate::validation;
use tracing::debug;

/// Run one command against the configured backend and return what to print
pub fn run(config: &StoreConfig, command: Commands) -> Result<String> {
    debug!(backend = config.backend.as_str(), "running command");
    match config.backend {
        Backend::Session => {
            let session = SessionFile::new(&config.session);
            let mut store = session.load()?;
            let output = dispatch(&mut store, command)?;
            session.save(&store)?;
            Ok(output)
        }
        Backend::Database => {
            let mut store = RelationalStore::open(&config.database)?;
            let output = dispatch(&mut store, command)?;
            store.disconnect()?;
            Ok(output)
        }
    }
}

/// Route a parsed command to its handler
pub fn dispatch(store: &mut dyn TodoStore, command: Commands) -> Result<String> {
    match command {
        Commands::Lists => handle_lists(store),
        Commands::New { name } => handle_new_list(store, &name),
        Commands::Show { list } => handle_show(store, list),
        Commands::Rename { list, name } => handle_rename(store, list, &name),
        Commands::Delete { list } => handle_delete(store, list),
        Commands::Add { list, name } => handle_add_todo(store, list, &name),
        Commands::Remove { list, todo } => handle_remove_todo(store, list, todo),
        Commands::Check { list, todo } => handle_set_status(store, list, todo, true),
        Commands::Uncheck { list, todo } => handle_set_status(store, list, todo, false),
        Commands::CompleteAll { list } => handle_complete_all(store, list),
    }
}

pub fn handle_lists(store: &mut dyn TodoStore) -> Result<String> {
    let lists = store.all_lists()?;
    Ok(presentation::render_lists(&lists))
}

pub fn handle_new_list(store: &mut dyn TodoStore, raw_name: &str) -> Result<String> {
    let name = validation::validate_list_name(raw_name, &store.all_lists()?)?;
    let list = store.create_list(&name)?;
    Ok(format!("The list has been created. (#{})\n", list.id))
}

pub fn handle_show(store: &mut dyn TodoStore, list_id: i64) -> Result<String> {
    let list = store.find_list(list_id)?;
    Ok(presentation::render_list(&list))
}

pub fn handle_rename(store: &mut dyn TodoStore, list_id: i64, raw_name: &str) -> Result<String> {
    store.find_list(list_id)?;
    let name = validation::validate_list_name(raw_name, &store.all_lists()?)?;
    store.rename_list(list_id, &name)?;
    Ok("The list has been updated.\n".to_string())
}

pub fn handle_delete(store: &mut dyn TodoStore, list_id: i64) -> Result<String> {
    store.delete_list(list_id)?;
    Ok("The list has been deleted.\n".to_string())
}

pub fn handle_add_todo(store: &mut dyn TodoStore, list_id: i64, raw_name: &str) -> Result<String> {
    store.find_list(list_id)?;
    let name = validation::validate_todo_name(raw_name)?;
    match store.create_todo(list_id, &name)? {
        Some(todo) => Ok(format!("The todo was added. (#{})\n", todo.id)),
        None => Ok("The todo was added.\n".to_string()),
    }
}

pub fn handle_remove_todo(store: &mut dyn TodoStore, list_id: i64, todo_id: i64) -> Result<String> {
    store.delete_todo(list_id, todo_id)?;
    Ok("The todo has been deleted.\n".to_string())
}

pub fn handle_set_status(
    store: &mut dyn TodoStore,
    list_id: i64,
    todo_id: i64,
    completed: bool,
) -> Result<String> {
    store.set_todo_status(list_id, todo_id, completed)?;
    Ok("The todo has been updated.\n".to_string())
}

pub fn handle_complete_all(store: &mut dyn TodoStore, list_id: i64) -> Result<String> {
    store.complete_all(list_id)?;
    Ok("All todos have been updated.\n".to_string())
}
