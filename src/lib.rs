pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};

pub use adapters::console::{ConsoleView, OutputFormat};
pub use adapters::http::ApiClient;
pub use adapters::storage::LocalStorage;
pub use config::TomlConfig;
pub use crate::core::controller::{DownloadOutcome, FormController, FormOutcome};
pub use domain::directory::{CourtCategory, CourtDirectory};
pub use utils::error::{LookupError, Result};
