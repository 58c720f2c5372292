use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::handlers;
use crate::services::TodoStore;

// Create router with all routes. The store and config are injected so tests
// can build an isolated instance per case.
pub fn app(store: TodoStore, config: Config) -> Router {
    Router::new()
        // User routes
        .route("/users", post(handlers::register_user))
        .route("/users/:id", get(handlers::get_user))
        .route("/users/:id/pro", patch(handlers::activate_pro))

        // Todo routes
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/todos/:id/done", patch(handlers::complete_todo))

        // Add middleware
        .layer(CorsLayer::permissive())

        // Add state
        .with_state((store, config))
}
