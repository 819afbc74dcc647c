//! FitLink server library.
//!
//! Hosts the room-scoped WebRTC signaling relay and the resilient plan
//! aggregator that fans out to third-party fitness and nutrition APIs.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod app;
pub mod config;
