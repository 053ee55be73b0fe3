use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::args::{ListArgs, RecordCommand};
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::WriteAction;
use crate::presentation::{Renderer, ViewMode};
use fpadmin_engine::{EditMode, SortDirection};
use fpadmin_runtime::ListRequest;
use fpadmin_store::Stored;

pub fn handle<T: Stored>(ctx: &ExecutionContext, command: RecordCommand) -> Result<()> {
    match command {
        RecordCommand::List(args) => list::<T>(ctx, &args),
        RecordCommand::Show { id } => show::<T>(ctx, &id),
        RecordCommand::Create { data } => create::<T>(ctx, &data),
        RecordCommand::Edit { id, data: Some(data) } => edit::<T>(ctx, &id, &data),
        RecordCommand::Edit { id, data: None } => draft::<T>(ctx, &id),
        RecordCommand::Delete { id } => delete::<T>(ctx, &id),
    }
}

fn list_request(args: &ListArgs) -> ListRequest {
    let direction = if args.asc {
        Some(SortDirection::Ascending)
    } else if args.desc {
        Some(SortDirection::Descending)
    } else {
        None
    };

    ListRequest {
        search: args.search.clone(),
        status: args.status.clone(),
        only: args.only.clone(),
        selectors: args.selectors.clone(),
        since: args.since.clone(),
        until: args.until.clone(),
        sort: args.sort.clone(),
        direction,
        page: args.page,
        page_size: args.page_size,
    }
}

fn list<T: Stored>(ctx: &ExecutionContext, args: &ListArgs) -> Result<()> {
    let console = ctx.console()?;
    let request = list_request(args);
    let listing = console.list::<T>(&request)?;

    let result = presenters::present_list(listing, &request, console.store());
    ctx.renderer(args.view.resolve()).render(result)
}

fn show<T: Stored>(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let console = ctx.console()?;
    let detail = console.get::<T>(id)?;

    let result = presenters::present_detail(detail, console.store());
    ctx.renderer(ViewMode::default()).render(result)
}

fn draft<T: Stored>(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let console = ctx.console()?;
    let draft = console.draft_for::<T>(id)?;

    let result = presenters::present_draft(T::KIND, id, draft);
    ctx.renderer(ViewMode::default()).render(result)
}

fn create<T: Stored>(ctx: &ExecutionContext, data: &str) -> Result<()> {
    let draft = parse_draft::<T>(data)?;
    let mut console = ctx.console()?;

    match console.create::<T>(draft) {
        Ok(record) => {
            let result =
                presenters::present_written(WriteAction::Created, record, console.store());
            ctx.renderer(ViewMode::default()).render(result)
        }
        Err(err) => Err(rejected::<T>(ctx, EditMode::Create, None, err)),
    }
}

fn edit<T: Stored>(ctx: &ExecutionContext, id: &str, data: &str) -> Result<()> {
    let draft = parse_draft::<T>(data)?;
    let mut console = ctx.console()?;

    match console.update::<T>(id, draft) {
        Ok(record) => {
            let result =
                presenters::present_written(WriteAction::Updated, record, console.store());
            ctx.renderer(ViewMode::default()).render(result)
        }
        Err(err) => Err(rejected::<T>(ctx, EditMode::Edit, Some(id), err)),
    }
}

fn delete<T: Stored>(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let mut console = ctx.console()?;

    match console.delete::<T>(id)? {
        Some(record) => {
            let result =
                presenters::present_written(WriteAction::Deleted, record, console.store());
            ctx.renderer(ViewMode::default()).render(result)
        }
        None => {
            let result = presenters::present_nothing_deleted::<T>(T::KIND, id);
            ctx.renderer(ViewMode::default()).render(result)
        }
    }
}

/// `--data` is inline JSON, or `@path` to read it from a file.
fn parse_draft<T: Stored>(data: &str) -> Result<T::Draft> {
    let json = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft file: {}", path))?,
        None => data.to_string(),
    };

    serde_json::from_str(&json).with_context(|| format!("Invalid {} draft", T::KIND))
}

/// Print the validation report, if that is what failed, and turn the error
/// into the one `main` reports.
fn rejected<T: Stored>(
    ctx: &ExecutionContext,
    mode: EditMode,
    id: Option<&str>,
    err: fpadmin_runtime::Error,
) -> anyhow::Error {
    let Some(report) = err.validation_report() else {
        return err.into();
    };
    debug!(entity = %T::KIND, %mode, errors = report.errors.len(), "submission rejected");

    let result = presenters::present_validation_failure(T::KIND, mode, id, report);
    if let Err(render_err) = ctx.renderer(ViewMode::default()).render(result) {
        return render_err;
    }
    anyhow!("{} {} rejected: {}", mode, T::KIND, report)
}
