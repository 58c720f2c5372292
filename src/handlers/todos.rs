use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::extractors::UsernameHeader;
use crate::guards;
use crate::models::{Todo, TodoForm};
use crate::services::TodoStore;

pub async fn list_todos(
    State((store, _config)): State<(TodoStore, Config)>,
    UsernameHeader(username): UsernameHeader,
) -> AppResult<Response> {
    let users = store.lock();
    let index = guards::find_account(&users, &username)?;

    tracing::debug!("Listing {} todos for user {}", users[index].todos.len(), username);
    Ok(Json(users[index].todos.clone()).into_response())
}

pub async fn create_todo(
    State((store, config)): State<(TodoStore, Config)>,
    UsernameHeader(username): UsernameHeader,
    Json(form): Json<TodoForm>,
) -> AppResult<Response> {
    let mut users = store.lock();
    let index = guards::find_account(&users, &username)?;
    guards::check_todo_quota(&users[index], config.user.free_todo_limit)?;

    let todo = Todo::new(form.title, form.deadline);
    tracing::info!("Created todo {} for user {}", todo.id, username);
    users[index].todos.push(todo.clone());

    Ok((StatusCode::CREATED, Json(todo)).into_response())
}

pub async fn update_todo(
    State((store, _config)): State<(TodoStore, Config)>,
    UsernameHeader(username): UsernameHeader,
    Path(id): Path<String>,
    Json(form): Json<TodoForm>,
) -> AppResult<Response> {
    let mut users = store.lock();
    let (user_index, todo_index) = guards::find_todo(&users, &username, &id)?;

    // Only title and deadline are client-writable
    let todo = &mut users[user_index].todos[todo_index];
    todo.title = form.title;
    todo.deadline = form.deadline;

    tracing::info!("Updated todo {} for user {}", id, username);
    Ok(Json(todo.clone()).into_response())
}

pub async fn complete_todo(
    State((store, _config)): State<(TodoStore, Config)>,
    UsernameHeader(username): UsernameHeader,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let mut users = store.lock();
    let (user_index, todo_index) = guards::find_todo(&users, &username, &id)?;

    // Completion is idempotent; repeating it is not an error
    let todo = &mut users[user_index].todos[todo_index];
    todo.done = true;

    tracing::info!("Marked todo {} done for user {}", id, username);
    Ok(Json(todo.clone()).into_response())
}

pub async fn delete_todo(
    State((store, _config)): State<(TodoStore, Config)>,
    UsernameHeader(username): UsernameHeader,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let mut users = store.lock();
    let user_index = guards::find_account(&users, &username)?;
    guards::find_todo(&users, &username, &id)?;

    // Re-locate by id at removal time rather than trusting the guard's index
    let todo_index = users[user_index]
        .todos
        .iter()
        .position(|todo| todo.id == id)
        .ok_or(AppError::TodoNotFound)?;

    users[user_index].todos.remove(todo_index);
    tracing::info!("Deleted todo {} for user {}", id, username);

    Ok(StatusCode::NO_CONTENT.into_response())
}
