//! Shared error definitions and utilities used across all botdeck crates.

pub mod error;

pub use error::{BotdeckError, Error, FromMessage, Result};
