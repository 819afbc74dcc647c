//! Utilities shared by the FitLink binaries and server library.

pub mod logger;
pub mod time;
