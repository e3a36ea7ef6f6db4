//! Error types for the roster application.
//!
//! Domain errors are defined with `thiserror` and folded into the top level
//! [`Error`] through `#[from]`, so callers can propagate with `?`.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the roster application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
