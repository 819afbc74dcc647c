//! Data Transfer Objects (DTOs).
//!
//! DTOs are organized by protocol:
//! - `websocket`: signaling messages exchanged over WebSocket
//! - `http`: HTTP API request/response bodies
//! - `upstream`: response bodies of the third-party APIs

pub mod conversion;
pub mod http;
pub mod upstream;
pub mod websocket;
