//! Shared types, configuration and errors for the infical calendar engine.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
