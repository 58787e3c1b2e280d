//! Store selection

use clap::ValueEnum;
use std::path::PathBuf;

/// Default database file, used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE: &str = "todos.db";

/// Default session file for the session backend
pub const DEFAULT_SESSION: &str = ".todos-session.json";

/// Which store backs a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// In-memory store carried in a session file
    #[default]
    Session,
    /// SQLite database
    Database,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Session => "session",
            Backend::Database => "database",
        }
    }
}

/// Resolved store configuration for one command
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: Backend,
    pub database: PathBuf,
    pub session: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            database: PathBuf::from(DEFAULT_DATABASE),
            session: PathBuf::from(DEFAULT_SESSION),
        }
    }
}

/// Accept either a plain path or a `sqlite://` URL for the database target
pub fn database_path(target: &str) -> PathBuf {
    let path = target
        .strip_prefix("sqlite://")
        .or_else(|| target.strip_prefix("sqlite:"))
        .unwrap_or(target);
    PathBuf::from(path)
}
