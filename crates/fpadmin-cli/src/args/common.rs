use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per record)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (every field)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Parse a `field=value` selector for `--where`.
pub fn parse_selector(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", raw))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((field.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector() {
        assert_eq!(
            parse_selector("fp_type=法人").unwrap(),
            ("fp_type".to_string(), "法人".to_string())
        );
        assert_eq!(
            parse_selector("status = all").unwrap(),
            ("status".to_string(), "all".to_string())
        );
        assert!(parse_selector("fp_type").is_err());
        assert!(parse_selector("=x").is_err());
    }
}
