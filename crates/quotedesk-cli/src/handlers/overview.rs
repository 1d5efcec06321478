use anyhow::Result;
use quotedesk_runtime::QuoteDesk;
use quotedesk_store::RequestFilter;
use quotedesk_types::RequestStatus;
use std::path::Path;

use super::HandlerContext;
use crate::presentation::views::OverviewView;
use crate::presentation::{CommandResultViewModel, Guidance};

/// Shown when `quotedesk` runs without a subcommand.
pub fn handle(desk: &QuoteDesk, ctx: &HandlerContext, data_dir: &Path) -> Result<()> {
    let quotes = desk.quotes();
    let quote_requests = quotes.list(&RequestFilter::All)?.len();
    let pending = quotes
        .list(&RequestFilter::Status(RequestStatus::Pending))?
        .len();
    let support_requests = desk.support().list()?.len();

    ctx.render(
        CommandResultViewModel::new(OverviewView {
            data_dir: data_dir.to_path_buf(),
            quote_requests,
            pending,
            support_requests,
        })
        .with_suggestion(Guidance::new("Review requests").with_command("quotedesk quote list"))
        .with_suggestion(Guidance::new("All commands").with_command("quotedesk --help")),
    )
}
