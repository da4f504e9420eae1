//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use crate::generator::GenerationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Image generation error: {0}")]
    Generation(#[from] GenerationError),
}

pub type Result<T> = std::result::Result<T, Error>;
