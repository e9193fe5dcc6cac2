//! # FaqDesk Core
//! Shared building blocks for every FaqDesk crate.
//!
//! - [`config`]: TOML configuration with defaults for every field
//! - [`error`]: the crate-wide error type
//! - [`types`]: knowledge-base entries, conversation turns, chat payloads

pub mod config;
pub mod error;
pub mod types;

pub use config::FaqDeskConfig;
pub use error::{FaqDeskError, Result};
