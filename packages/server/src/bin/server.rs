//! FitLink server: WebRTC signaling relay and fitness plan aggregator.
//!
//! Run with:
//! ```not_rust
//! JWT_SECRET=change-me cargo run --bin fitlink-server
//! cargo run --bin fitlink-server -- --host 0.0.0.0 --port 3000 --jwt-secret change-me
//! ```

use std::sync::Arc;

use clap::Parser;
use fitlink_server::{
    app::build_app_state, config::Config, domain::UserRepository,
    infrastructure::repository::InMemoryUserRepository, ui::Server,
};
use fitlink_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Seed the user directory
    let users = match &config.users_file {
        Some(path) => match InMemoryUserRepository::from_file(path).await {
            Ok(users) => {
                tracing::info!(
                    "Loaded {} users from {}",
                    users.count().await,
                    path.display()
                );
                users
            }
            Err(e) => {
                tracing::error!("Failed to load users from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("No users file given; every plan request will be rejected");
            InMemoryUserRepository::new()
        }
    };
    let users: Arc<dyn UserRepository> = Arc::new(users);

    let state = match build_app_state(&config, users) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    match config.room_capacity() {
        Some(capacity) => tracing::info!("Room capacity: {}", capacity),
        None => tracing::info!("Room capacity: unlimited"),
    }

    let server = Server::new(state);
    if let Err(e) = server.run(config.host.clone(), config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
