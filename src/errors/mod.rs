// Defines the error taxonomy for the service using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

// Every variant carries its client-visible message; the status code mapping
// lives in response.rs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("user does not exist")]
    UserNotFound,

    #[error("todo does not exist")]
    TodoNotFound,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("invalid todo id")]
    InvalidTodoId,

    #[error("Pro plan is already activated.")]
    AlreadyPro,

    #[error("the maximum limit of ten tasks in free plan has been reached")]
    QuotaExceeded,
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
