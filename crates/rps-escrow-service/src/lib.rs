//! RPS Escrow Service
//!
//! HTTP surface over single-use commit-reveal Rock-Paper-Scissors games,
//! backed by an in-memory ledger.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use handlers::*;
pub use state::AppState;

/// Build the API router over shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Codec
        .route("/api/commit", post(commit_move))
        // Games
        .route("/api/games", post(create_game))
        .route("/api/games", get(list_games))
        .route("/api/games/:id", get(get_game))
        .route("/api/games/:id/blind", get(get_blind))
        .route("/api/games/:id/pot", get(get_pot))
        .route("/api/games/:id/moves/:address", get(get_moves))
        .route("/api/games/:id/play", post(play))
        .route("/api/games/:id/evaluate", post(evaluate))
        .route("/api/games/:id/claim", post(claim))
        // Ledger
        .route("/api/ledger/fund", post(fund))
        .route("/api/ledger/balance/:address", get(get_balance))
        // Health
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
