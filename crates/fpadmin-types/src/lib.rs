pub mod entities;
pub mod error;
mod id;
mod record;
mod status;
mod util;

pub use entities::*;
pub use error::{Error, Result};
pub use id::*;
pub use record::*;
pub use status::*;
pub use util::*;
