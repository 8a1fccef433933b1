//! Core abstractions for the engine layer

pub mod config;
pub mod error;
pub mod provider;
pub mod types;
