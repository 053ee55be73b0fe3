use std::path::Path;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};
use fpadmin_runtime::Config;

pub fn present_config(path: &Path, config: Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config: Some(config),
        raw: None,
        error: None,
    });

    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file; showing defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk").with_command(cmd::CONFIG_INIT),
            )
    }
}

/// The file exists but does not load; show it verbatim so it can be fixed.
pub fn present_invalid_config(
    path: &Path,
    raw: String,
    error: String,
) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists: true,
        config: None,
        raw: Some(raw),
        error: Some(error.clone()),
    })
    .with_badge(StatusBadge::warning(format!("Config is invalid: {}", error)))
    .with_suggestion(Guidance::new(format!(
        "Fix {} or remove it to fall back to the defaults",
        path.display()
    )))
}

pub fn present_config_init(
    path: &Path,
    config: Config,
    written: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let badge = if written {
        StatusBadge::success(format!("Wrote {}", path.display()))
    } else {
        StatusBadge::info(format!("{} already exists; left as is", path.display()))
    };

    CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists: true,
        config: Some(config),
        raw: None,
        error: None,
    })
    .with_badge(badge)
    .with_suggestion(Guidance::new("Review it").with_command(cmd::CONFIG_SHOW))
}
