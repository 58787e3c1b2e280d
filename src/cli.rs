use crate::config::{self, Backend, StoreConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "Multi-list todo manager")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Store backing this command
    #[arg(long, global = true, value_enum, env = "TODOS_BACKEND", default_value_t = Backend::Session)]
    pub backend: Backend,

    /// Database file (or sqlite:// URL) for the database backend
    #[arg(long, global = true, env = "DATABASE_URL", default_value = config::DEFAULT_DATABASE)]
    pub database: String,

    /// Session file for the session backend
    #[arg(long, global = true, env = "TODOS_SESSION", default_value = config::DEFAULT_SESSION)]
    pub session: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            backend: self.backend,
            database: config::database_path(&self.database),
            session: self.session.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// View all lists
    Lists,

    /// Create a new list
    New {
        /// List name
        name: String,
    },

    /// View a list and its todos
    Show {
        /// List ID
        list: i64,
    },

    /// Rename a list
    Rename {
        /// List ID
        list: i64,
        /// New name
        name: String,
    },

    /// Delete a list and all of its todos
    Delete {
        /// List ID
        list: i64,
    },

    /// Add a todo to a list
    Add {
        /// List ID
        list: i64,
        /// Todo name
        name: String,
    },

    /// Delete a todo
    Remove {
        /// List ID
        list: i64,
        /// Todo ID
        todo: i64,
    },

    /// Mark a todo as completed
    Check {
        /// List ID
        list: i64,
        /// Todo ID
        todo: i64,
    },

    /// Mark a todo as not completed
    Uncheck {
        /// List ID
        list: i64,
        /// Todo ID
        todo: i64,
    },

    /// Complete every todo in a list
    CompleteAll {
        /// List ID
        list: i64,
    },
}
