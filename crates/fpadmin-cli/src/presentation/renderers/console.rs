use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusBadge, StatusLevel, ViewMode,
};

/// Writes command results to stdout, as JSON or as laid-out text.
pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self {
            format,
            mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        let text = format!("{} {}", badge.icon(), badge.label);
        if !self.color {
            return text;
        }
        match badge.level {
            StatusLevel::Success => text.green().bold().to_string(),
            StatusLevel::Info => text.bold().to_string(),
            StatusLevel::Warning => text.yellow().bold().to_string(),
            StatusLevel::Error => text.red().bold().to_string(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            return Ok(());
        }

        // Minimal output is for pipes: the content and nothing around it
        if self.mode == ViewMode::Minimal {
            write!(out, "{}", result.content.create_view(self.mode))?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{}", self.badge_line(badge))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() {
            writeln!(out)?;
            let heading = if self.color {
                "Next:".cyan().bold().to_string()
            } else {
                "Next:".to_string()
            };
            writeln!(out, "{}", heading)?;
            for tip in &result.suggestions {
                write!(out, "  - {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
