//! Common error types for Rumo

use thiserror::Error;

/// Common result type for Rumo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Rumo crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
}
