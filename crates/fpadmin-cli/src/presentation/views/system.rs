use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# {}", self.data.path)?;
        if let Some(error) = &self.data.error {
            writeln!(f, "# invalid: {}", error)?;
        }
        match (&self.data.config, &self.data.raw) {
            (Some(config), _) => {
                let body = toml::to_string_pretty(config).map_err(|_| fmt::Error)?;
                write!(f, "{}", body)
            }
            (None, Some(raw)) => write!(f, "{}", raw),
            (None, None) => Ok(()),
        }
    }
}
