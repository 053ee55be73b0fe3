pub mod text;

pub use text::{display_width, pad, truncate};
