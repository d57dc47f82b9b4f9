use studytrack_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not connected to database {0}")]
    NotConnected(String),

    #[error("course '{0}' already exists")]
    DuplicateCourse(String),

    #[error("course '{0}' does not exist")]
    UnknownCourse(String),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    /// Returns `true` for failures the user can fix by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateCourse(_) | StoreError::UnknownCourse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
