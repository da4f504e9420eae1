//! Prompt-driven image generator front end
//!
//! Collects a free-text prompt, forwards it to a remote image-generation
//! endpoint and exposes the resulting page state (idle, loading or image)
//! for rendering. Failures are reported through an injected notifier.

pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod models;
pub mod notify;
pub mod page;

pub use error::{Error, Result};
