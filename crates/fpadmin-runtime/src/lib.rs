// Runtime layer - configuration and the console facade
// Resolves where the console keeps its files, loads config.toml, and owns the
// Store for the lifetime of one command.
//
// Every operation is generic over fpadmin_store::Stored, so the ten admin
// screens share one list / detail / create / edit / delete path.

mod console;
pub mod config;
pub mod error;
mod request;

pub use config::{Config, ListConfig, LogConfig, PATH_ENV, SeedConfig, resolve_workspace_path};
pub use console::{Console, ConsoleOptions, Listing, RecordDetail, init_config};
pub use error::{Error, Result};
pub use request::ListRequest;
