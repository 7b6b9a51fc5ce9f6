pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::Console;
pub use config::{toml_config::IdeConfig, IdeSettings};
pub use core::ide::IdeEngine;
pub use domain::model::{Choice, MenuState};
pub use utils::error::{IdeError, Result};
pub use utils::monitor::SessionSummary;
