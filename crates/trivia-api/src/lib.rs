//! trivia-api — HTTP/JSON API for the trivia question bank.
//!
//! Routes:
//! - `GET /categories`
//! - `GET /questions?page=N`
//! - `POST /questions` (create, or search with `searchTerm`)
//! - `DELETE /questions/{id}`
//! - `GET /categories/{id}/questions`
//! - `POST /quizzes`

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;

use trivia_core::traits::QuestionStore;

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn QuestionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn QuestionStore {
        self.store.as_ref()
    }
}

/// Build the API router over a store.
pub fn router(store: Arc<dyn QuestionStore>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:id/questions",
            get(handlers::category_questions),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_or_search_questions),
        )
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(handlers::not_found)
        .layer(axum::middleware::map_response(
            middleware::json_method_not_allowed,
        ))
        .layer(axum::middleware::from_fn(middleware::cors))
        .with_state(AppState::new(store))
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn QuestionStore>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, store = store.name(), "trivia API listening");
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
}
