use anyhow::Result;

use super::record;
use crate::args::RecordCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Renderer, ViewMode};
use fpadmin_types::User;

/// Users share the generic verbs, except that showing one marks it seen.
pub fn handle(ctx: &ExecutionContext, command: RecordCommand) -> Result<()> {
    match command {
        RecordCommand::Show { id } => show(ctx, &id),
        other => record::handle::<User>(ctx, other),
    }
}

fn show(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let mut console = ctx.console()?;
    let detail = console.open_user(id)?;

    let result = presenters::present_detail(detail, console.store());
    ctx.renderer(ViewMode::default()).render(result)
}
