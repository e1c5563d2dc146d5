//! HTTP boundary for the shortlink service.
//!
//! [`App::router`] wires the shorten, info and redirect endpoints onto an
//! [`AppState`] holding the shortening and resolution engines.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
