use anyhow::{Context, Result};
use quotedesk_core::FormProfile;
use quotedesk_runtime::{QuoteDesk, Submission};
use quotedesk_store::RequestFilter;
use quotedesk_types::{FormFields, RequestId, RequestStatus};
use std::path::PathBuf;

use super::{HandlerContext, QUOTE_THANKS};
use crate::presentation::views::{DashboardView, ExportView, QuoteSubmittedView, QuoteView};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub fn submit(
    desk: &QuoteDesk,
    ctx: &HandlerContext,
    pairs: &[String],
    as_client: bool,
) -> Result<()> {
    let fields = FormFields::parse_pairs(pairs)?;
    let profile = if as_client {
        FormProfile::Client
    } else {
        FormProfile::Public
    };

    match desk.quotes().submit(&fields, profile)? {
        Submission::Saved(request) => {
            let list_cmd = if as_client {
                "quotedesk quote list --mine"
            } else {
                "quotedesk quote list"
            };
            ctx.render(
                CommandResultViewModel::new(QuoteSubmittedView { request })
                    .with_badge(StatusBadge::success(QUOTE_THANKS))
                    .with_suggestion(Guidance::new("See it on the dashboard").with_command(list_cmd)),
            )
        }
        Submission::NotPersisted { record, error } => {
            let id = record.id;
            ctx.render(
                CommandResultViewModel::new(QuoteSubmittedView { request: record })
                    .with_badge(StatusBadge::error("Quote request was NOT saved")),
            )?;
            anyhow::bail!("could not save quote request {}: {}", id, error)
        }
    }
}

pub fn list(
    desk: &QuoteDesk,
    ctx: &HandlerContext,
    client: Option<String>,
    mine: bool,
    status: Option<RequestStatus>,
) -> Result<()> {
    let dashboard = if mine {
        desk.quotes().client_dashboard()?
    } else {
        let filter = match (client, status) {
            (Some(name), _) => RequestFilter::Client(name),
            (None, Some(status)) => RequestFilter::Status(status),
            (None, None) => RequestFilter::All,
        };
        desk.quotes().contractor_dashboard(&filter)?
    };

    let mut view_model = CommandResultViewModel::new(DashboardView(dashboard));
    if view_model.content.0.cards.is_empty() {
        view_model = view_model.with_suggestion(
            Guidance::new("Submit a request")
                .with_command("quotedesk quote submit --field email=you@example.com ..."),
        );
    }
    ctx.render(view_model)
}

pub fn complete(desk: &QuoteDesk, ctx: &HandlerContext, id: u64) -> Result<()> {
    let request = desk
        .quotes()
        .complete(RequestId::new(id))
        .with_context(|| format!("failed to complete request {}", id))?;

    ctx.render(
        CommandResultViewModel::new(QuoteView { request })
            .with_badge(StatusBadge::success("Marked completed")),
    )
}

pub fn export(
    desk: &QuoteDesk,
    ctx: &HandlerContext,
    output: Option<PathBuf>,
    client: Option<String>,
) -> Result<()> {
    let filter = client.map_or(RequestFilter::All, RequestFilter::Client);

    let Some(path) = output else {
        let stdout = std::io::stdout().lock();
        desk.quotes().export_csv(&filter, stdout)?;
        return Ok(());
    };

    let file = std::fs::File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let rows = desk.quotes().export_csv(&filter, file)?;

    ctx.render(
        CommandResultViewModel::new(ExportView { rows, output: path })
            .with_badge(StatusBadge::success("Exported")),
    )
}
