pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::HttpTransport;
pub use config::SyncConfig;
pub use core::{client::NoteClient, frontmatter::BlockTimezone, sync::FrontmatterSync};
pub use utils::error::{Result, SyncError};
