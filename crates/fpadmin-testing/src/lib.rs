//! Testing infrastructure for fpadmin integration tests.
//!
//! - `TestWorld`: isolated data directory plus a CLI runner
//! - `assertions`: checks over the `{ badge, content, suggestions }` JSON
//! - `fixtures`: config files, snapshots and draft payloads

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
