//! Admin records and their edit drafts.
//!
//! Every entity comes with a `*Draft` whose fields are all optional: in create
//! mode a draft carries the initial values, in edit mode only the fields the
//! operator actually submitted.

mod allocation;
mod billing;
mod content;
mod fp;
mod history;
mod partner;
mod review;
mod user;

pub use allocation::*;
pub use billing::*;
pub use content::*;
pub use fp::*;
pub use history::*;
pub use partner::*;
pub use review::*;
pub use user::*;
