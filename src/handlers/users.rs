use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::guards;
use crate::models::{CreateUserForm, User};
use crate::services::TodoStore;

pub async fn register_user(
    State((store, _config)): State<(TodoStore, Config)>,
    Json(form): Json<CreateUserForm>,
) -> AppResult<Response> {
    let mut users = store.lock();

    // Usernames double as the request credential, so they must stay unique
    if users.iter().any(|user| user.username == form.username) {
        return Err(AppError::UsernameTaken);
    }

    let user = User::new(form.name, form.username);
    tracing::info!("Registered user {} ({})", user.username, user.id);
    users.push(user.clone());

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

pub async fn get_user(
    State((store, _config)): State<(TodoStore, Config)>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let users = store.lock();
    let index = guards::find_user_by_id(&users, &id)?;

    Ok(Json(users[index].clone()).into_response())
}

pub async fn activate_pro(
    State((store, _config)): State<(TodoStore, Config)>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let mut users = store.lock();
    let index = guards::find_user_by_id(&users, &id)?;

    // The upgrade is one-way; repeating it is a client error
    if users[index].pro {
        return Err(AppError::AlreadyPro);
    }

    users[index].pro = true;
    tracing::info!("Activated pro plan for user {}", users[index].username);

    Ok(Json(users[index].clone()).into_response())
}
