pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{ErrorKind, Result, TodoError};
pub use models::*;
pub use store::{EphemeralStore, RelationalStore, TodoStore};
