//! Error types for saga loading.
//!
//! Parsing itself never fails: malformed markup is tolerated and an input
//! with no chapters yields an empty mapping. Only acquiring the input can
//! go wrong.

use thiserror::Error;

/// Errors that can occur while loading a saga file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
