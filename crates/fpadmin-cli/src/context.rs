use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::presentation::{ConsoleRenderer, OutputFormat, ViewMode};
use fpadmin_runtime::{Config, Console, ConsoleOptions};

/// What every handler needs: where files live, how to print, and the
/// config, loaded on first use.
pub struct ExecutionContext {
    data_dir: PathBuf,
    data_file: Option<PathBuf>,
    format: OutputFormat,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, data_file: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            data_file,
            format,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        Ok(self
            .config
            .get_or_try_init(|| Config::load_from(&self.config_path()))?)
    }

    /// Open the record console; the store comes from `--data-file` when it
    /// exists, from the demo seed otherwise.
    pub fn console(&self) -> Result<Console> {
        let options = ConsoleOptions {
            data_dir: self.data_dir.clone(),
            data_file: self.data_file.clone(),
            today: None,
        };
        Ok(Console::open_with_config(options, self.config()?.clone())?)
    }

    pub fn renderer(&self, mode: ViewMode) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format, mode)
    }
}
