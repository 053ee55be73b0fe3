// Views lay view models out as text. They pick what to show per ViewMode and
// never compute anything the presenter could have.

pub mod record;
pub mod system;
