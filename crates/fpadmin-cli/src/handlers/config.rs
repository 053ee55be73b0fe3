use anyhow::{Context, Result};

use crate::args::ConfigCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Renderer, ViewMode};

pub fn handle(ctx: &ExecutionContext, command: ConfigCommand) -> Result<()> {
    let path = ctx.config_path();
    let result = match command {
        ConfigCommand::Show => match ctx.config() {
            Ok(config) => presenters::present_config(&path, config.clone()),
            Err(err) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                presenters::present_invalid_config(&path, raw, format!("{:#}", err))
            }
        },
        ConfigCommand::Init => {
            let (config, written) = fpadmin_runtime::init_config(ctx.data_dir())?;
            presenters::present_config_init(&path, config, written)
        }
    };
    ctx.renderer(ViewMode::default()).render(result)
}
