// In-memory store for admin records
// The only "persistence" the console has: one owned Store, built from seed data
// or a snapshot file, handed by reference to whoever needs it.
//
// Create and edit both go through fpadmin_engine::validate_submission, then a
// reference check against the other collections, before anything is written.

mod collection;
pub mod error;
mod seed;
mod snapshot;
mod store;
mod surface;

pub use collection::Collection;
pub use error::{Error, Result};
pub use snapshot::SNAPSHOT_VERSION;
pub use store::{ResolvedReference, Store, Stored};
pub use surface::{DetailSurface, SurfaceState};
