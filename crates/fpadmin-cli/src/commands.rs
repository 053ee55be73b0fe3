use anyhow::Result;

use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;
use fpadmin_runtime::resolve_workspace_path;
use fpadmin_types::{
    AdBanner, FaqItem, Fp, LegalDocument, MatchingAllocation, MatchingHistory, Partner,
    PaymentUrl, ReviewRecord, SubscriptionPlan, User,
};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.data_file, cli.format.into());

    // A broken config.toml is reported by the command that needs it
    let config_level = ctx
        .config()
        .map(|c| c.log.level.clone())
        .unwrap_or_else(|_| "warn".into());
    logging::init(cli.log_level, &config_level);

    match cli.command {
        Commands::User { command } => handlers::user::handle(&ctx, command),
        Commands::Fp { command } => handlers::record::handle::<Fp>(&ctx, command),
        Commands::Partner { command } => handlers::record::handle::<Partner>(&ctx, command),
        Commands::Allocation { command } => {
            handlers::record::handle::<MatchingAllocation>(&ctx, command)
        }
        Commands::History { command } => {
            handlers::record::handle::<MatchingHistory>(&ctx, command)
        }
        Commands::Review { command } => handlers::record::handle::<ReviewRecord>(&ctx, command),
        Commands::PaymentUrl { command } => handlers::record::handle::<PaymentUrl>(&ctx, command),
        Commands::Plan { command } => handlers::record::handle::<SubscriptionPlan>(&ctx, command),
        Commands::Faq { command } => handlers::record::handle::<FaqItem>(&ctx, command),
        Commands::Legal { command } => handlers::record::handle::<LegalDocument>(&ctx, command),
        Commands::Banner { command } => handlers::record::handle::<AdBanner>(&ctx, command),
        Commands::Export => handlers::export::handle(&ctx),
        Commands::Config { command } => handlers::config::handle(&ctx, command),
    }
}
