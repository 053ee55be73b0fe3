//! # Presentation Layer
//!
//! Output for every command flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models/` hold raw data and derive `Serialize`. JSON output is the
//!   whole view model wrapped in `CommandResultViewModel`, whatever the view
//!   mode.
//! * `presenters/` turn runtime results into view models and decide which
//!   badge and next-step suggestions apply.
//! * `views/` implement `fmt::Display` and own layout, column widths and what
//!   each `ViewMode` hides.
//! * `renderers/` choose between JSON and text and add colour on a terminal.
//! * `formatters/` are string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel,
    ViewMode,
};
