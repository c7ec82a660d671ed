//! User & Payment Service - Main Application Entry Point
//!
//! A REST API for registering users and processing payments against their
//! credit cards. Users and payments are kept in memory for the lifetime of
//! the process.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: in-memory stores guarded by async read/write locks
//! - **Format**: JSON requests, plain-text status messages
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the user and payment stores
//! 3. Build HTTP router with routes and middleware
//! 4. Serve on the configured address until Ctrl-C or SIGTERM

mod config;
mod error;
mod handlers;
mod models;
mod services;
mod state;
mod validation;

use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create the in-memory user and payment stores
    let state = AppState::new();

    // Bind to network address and start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Serve until Ctrl-C or SIGTERM, letting in-flight requests finish
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the HTTP router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public health check
        .route("/health", get(handlers::health::health_check))
        // User registration and listing
        .route(
            "/users",
            post(handlers::users::register_user).get(handlers::users::list_users),
        )
        // Payment processing
        .route("/payments", post(handlers::payments::process_payment))
        // Add request tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Anything that panics inside a handler becomes a 500
        .layer(CatchPanicLayer::custom(handle_panic))
        // Share the stores with all handlers via State extraction
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
