//! Errors reported by the view cache.

use std::io;
use thiserror::Error;

/// Errors that can occur while setting up or configuring the cache
#[derive(Debug, Error)]
pub enum ViewCacheError {
    #[error("view cache is already initialized")]
    AlreadyInitialized,

    #[error("view factory failed: {0}")]
    Factory(#[source] anyhow::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
