//! Helpers shared by the integration tests: an in-process server on an ephemeral port.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use fitlink_server::{
    app::build_app_state, config::Config, domain::UserRepository,
    infrastructure::repository::InMemoryUserRepository, ui::Server,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use tokio::net::TcpListener;

pub const JWT_SECRET: &str = "integration-secret";

/// Helper struct holding the address of a running test server
pub struct TestServer {
    pub addr: SocketAddr,
}

impl TestServer {
    /// Start a server with the given extra command line arguments
    pub async fn start(args: &[&str], users: InMemoryUserRepository) -> Self {
        let mut argv = vec!["fitlink-server", "--jwt-secret", JWT_SECRET];
        argv.extend_from_slice(args);
        let config = Config::parse_from(argv);

        let users: Arc<dyn UserRepository> = Arc::new(users);
        let state = build_app_state(&config, users).expect("Failed to build app state");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local address");
        tokio::spawn(Server::new(state).serve(listener, std::future::pending()));

        TestServer { addr }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Bind `router` on an ephemeral port and return its base URL
pub async fn spawn_mock(router: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("Failed to get local address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

#[derive(serde::Serialize)]
struct Claims<'a> {
    id: &'a str,
    exp: u64,
}

/// Issue a bearer token for `user_id` signed with the test secret
pub fn bearer_token(user_id: &str) -> String {
    let exp = (chrono::Utc::now().timestamp() + 3600) as u64;
    let token = encode(
        &Header::default(),
        &Claims { id: user_id, exp },
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode token");
    format!("Bearer {}", token)
}
