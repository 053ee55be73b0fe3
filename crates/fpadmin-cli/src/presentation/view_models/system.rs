use serde::Serialize;
use std::fmt;

use fpadmin_runtime::Config;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    /// Whether `path` exists on disk; defaults are shown when it does not
    pub exists: bool,
    /// `None` when the file on disk does not parse or validate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
    /// File contents as written, kept when they could not be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self))
    }
}
