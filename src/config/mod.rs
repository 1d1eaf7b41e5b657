#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

/// Directory documents land in when no other location is configured.
pub const DOWNLOAD_DIR_DEFAULT: &str = "./downloads";

#[cfg(feature = "cli")]
pub use cli::{Cli, Command};
pub use toml_config::TomlConfig;
