use serde::Serialize;

/// How much of each record the text output shows. JSON output ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Ids only, one per line
    Minimal,
    /// One line per record
    Compact,
    #[default]
    Standard,
    /// Every field
    Verbose,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::args::OutputFormat> for OutputFormat {
    fn from(format: crate::args::OutputFormat) -> Self {
        match format {
            crate::args::OutputFormat::Plain => Self::Text,
            crate::args::OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, label)
    }

    fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        match self.level {
            StatusLevel::Success => "✔",
            StatusLevel::Info => "ℹ",
            StatusLevel::Warning => "⚠",
            StatusLevel::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A next step offered after a command, optionally with the command to run
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
