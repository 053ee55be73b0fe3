use anyhow::Result;

use crate::context::ExecutionContext;

/// The snapshot is JSON already; it is printed as is so it can be fed back
/// through `--data-file`.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let console = ctx.console()?;
    println!("{}", console.export()?);
    Ok(())
}
