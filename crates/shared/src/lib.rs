//! Shared types, errors, and configuration for Saldo.
//!
//! This crate holds the pieces every other crate needs:
//! - Typed IDs for entity references
//! - The application-wide error type
//! - Configuration loading

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, ReportConfig, ServerConfig};
pub use error::{AppError, AppResult};
