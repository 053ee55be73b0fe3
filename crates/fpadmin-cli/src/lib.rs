// fpadmin CLI - the operator's way into the admin console
//
// Each admin screen (users, FPs, partners, allocations, reviews, payment URLs,
// plans, FAQ, legal documents, banners) is a subcommand with the same verbs.
// Handlers open a fpadmin_runtime::Console, run one operation, and hand the
// result to a presenter; nothing here knows about filtering or validation.
//
// Records live in memory. Without --data-file every invocation starts from
// the demo seed and changes vanish at exit; with it, the snapshot is loaded
// first and rewritten after every successful change.

mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, ListArgs, RecordCommand};
pub use commands::run;
