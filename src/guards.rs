use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::User;

// Request validation guards. Each guard inspects the user list (held under
// the caller's store lock) and either yields indices into it or fails with
// the error the route must answer with. Handlers compose them in order and
// stop at the first failure, so a failed guard means nothing mutates.

/// Resolves the account named by the `username` request header.
pub fn find_account(users: &[User], username: &str) -> AppResult<usize> {
    users
        .iter()
        .position(|user| user.username == username)
        .ok_or(AppError::UserNotFound)
}

/// Creation-time quota check: free accounts are capped at `free_limit` todos,
/// pro accounts are uncapped.
pub fn check_todo_quota(user: &User, free_limit: usize) -> AppResult<()> {
    if user.todos.len() >= free_limit && !user.pro {
        return Err(AppError::QuotaExceeded);
    }

    Ok(())
}

/// Resolves both the account and the todo named by a `/todos/:id` route.
///
/// The checks run in a fixed order: unknown usernames answer before malformed
/// ids, and malformed ids answer before missing todos. A well-formed id that
/// matches nothing is a not-found, never a bad request.
pub fn find_todo(users: &[User], username: &str, todo_id: &str) -> AppResult<(usize, usize)> {
    let user_index = users
        .iter()
        .position(|user| user.username == username)
        .ok_or(AppError::UserNotFound)?;

    if !is_valid_todo_id(todo_id) {
        return Err(AppError::InvalidTodoId);
    }

    let todo_index = users[user_index]
        .todos
        .iter()
        .position(|todo| todo.id == todo_id)
        .ok_or(AppError::TodoNotFound)?;

    Ok((user_index, todo_index))
}

/// Resolves a user by the `id` path parameter (not the username header).
pub fn find_user_by_id(users: &[User], id: &str) -> AppResult<usize> {
    users
        .iter()
        .position(|user| user.id == id)
        .ok_or(AppError::UserNotFound)
}

// Shape check only; a valid id says nothing about whether the todo exists.
fn is_valid_todo_id(candidate: &str) -> bool {
    Uuid::parse_str(candidate).is_ok()
}
