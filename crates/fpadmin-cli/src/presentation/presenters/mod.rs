mod record;
mod system;

pub use record::*;
pub use system::*;
