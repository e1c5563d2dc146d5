use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, info_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/shorten", post(shorten_handler))
                    .route("/info", get(info_handler)),
            )
            .route("/{shortlink}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::new())
            .with_state(state)
    }
}
