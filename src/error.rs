use thiserror::Error;

/// All possible errors in the todo manager
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("The specified list was not found.")]
    ListNotFound(i64),

    #[error("List name must be between 1 and 100 characters.")]
    ListNameLength,

    #[error("List name must be unique.")]
    ListNameTaken,

    #[error("Todo must be between 1 and 100 characters.")]
    TodoNameLength,

    #[error("No ids left after #{0}")]
    IdsExhausted(i64),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session data error: {0}")]
    Session(#[from] serde_json::Error),
}

/// Broad classification used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced list does not exist
    NotFound,
    /// A name failed the length or uniqueness rule
    Validation,
    /// Storage could not be read or written
    Backend,
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::ListNotFound(_) => ErrorKind::NotFound,
            TodoError::ListNameLength | TodoError::ListNameTaken | TodoError::TodoNameLength => {
                ErrorKind::Validation
            }
            TodoError::IdsExhausted(_)
            | TodoError::Db(_)
            | TodoError::Io(_)
            | TodoError::Session(_) => ErrorKind::Backend,
        }
    }

    /// Recoverable errors are reported to the user; the rest abort the command
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Backend
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
