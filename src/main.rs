mod config;
mod errors;
mod extractors;
mod guards;
mod handlers;
mod models;
mod routes;
mod services;

use crate::{config::Config, services::TodoStore};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Initialize the in-memory user store; state lives and dies with the process
    let store = TodoStore::new();

    // Create router with all routes
    let app = routes::app(store, config.clone());

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", config.server.host, config.server.port)
    )
    .await
    .expect("Failed to bind server");

    println!("Server running on {}:{}", config.server.host, config.server.port);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
