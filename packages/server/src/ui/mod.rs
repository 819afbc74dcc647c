//! FitLink HTTP and WebSocket surface.

mod auth;
mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use auth::{AuthError, AuthUser, Claims, JwtVerifier};
pub use error::ApiError;
pub use server::Server;
pub use state::AppState;
