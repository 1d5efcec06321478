use anyhow::Result;
use quotedesk_runtime::{QuoteDesk, Submission};
use quotedesk_types::FormFields;

use super::{HandlerContext, SUPPORT_THANKS};
use crate::presentation::views::{SupportListView, SupportSubmittedView};
use crate::presentation::{CommandResultViewModel, StatusBadge};

pub fn submit(desk: &QuoteDesk, ctx: &HandlerContext, pairs: &[String]) -> Result<()> {
    let fields = FormFields::parse_pairs(pairs)?;

    match desk.support().submit(&fields)? {
        Submission::Saved(request) => ctx.render(
            CommandResultViewModel::new(SupportSubmittedView { request })
                .with_badge(StatusBadge::success(SUPPORT_THANKS)),
        ),
        Submission::NotPersisted { record, error } => {
            let id = record.id;
            ctx.render(
                CommandResultViewModel::new(SupportSubmittedView { request: record })
                    .with_badge(StatusBadge::error("Support message was NOT saved")),
            )?;
            anyhow::bail!("could not save support message {}: {}", id, error)
        }
    }
}

pub fn list(desk: &QuoteDesk, ctx: &HandlerContext) -> Result<()> {
    let requests = desk.support().list()?;
    ctx.render(CommandResultViewModel::new(SupportListView { requests }))
}
