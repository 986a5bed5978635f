//! Configuration loading, validation, and env substitution.
//!
//! Config files: `botdeck.toml`, `botdeck.yaml`, or `botdeck.json`
//! Searched in `./` then `~/.config/botdeck/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, find_or_default_config_path, load_config, save_config},
    schema::{BotdeckConfig, DirectoryConfig, PersistenceConfig, ServerConfig},
};
