//! Infrastructure layer: concrete implementations of the domain interfaces.

pub mod cache;
pub mod dto;
pub mod message_pusher;
pub mod repository;
pub mod upstream;
