//! インメモリ Repository 実装

pub mod room;
pub mod user;

pub use room::InMemoryRoomRepository;
pub use user::{InMemoryUserRepository, UserLoadError};
