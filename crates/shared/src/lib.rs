//! Shared types, errors, and configuration for Coopbooks.
//!
//! This crate provides common types used across all other crates:
//! - Currency and amount formatting with decimal precision
//! - Report options shared by configuration and the report engine
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
