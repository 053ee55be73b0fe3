// One subcommand per admin screen, each with the same five verbs
// (list, show, create, edit, delete). The verbs are generic over the record
// type, so adding an entity means adding one variant here and one dispatch arm.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fpadmin")]
#[command(about = "Operator console for the FP matching service", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding config.toml (default: $FPADMIN_PATH or the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Snapshot to load records from and save changes to"
    )]
    pub data_file: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Overrides [log] level; RUST_LOG wins over both")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}
