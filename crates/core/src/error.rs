//! Common error types
//!
//! Steady-state failures (enumeration, config I/O) are recovered close to
//! where they occur and never reach the render path; these variants exist
//! so the recovery sites and tests can name what they swallowed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("enumeration error: {0}")]
    Enumeration(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
