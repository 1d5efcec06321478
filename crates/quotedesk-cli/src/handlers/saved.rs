use anyhow::Result;
use quotedesk_runtime::QuoteDesk;

use super::HandlerContext;
use crate::presentation::views::{SavedListView, SavedToggleView};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub fn toggle(desk: &QuoteDesk, ctx: &HandlerContext, id: u64) -> Result<()> {
    let saved = desk.saved().toggle(id)?;
    let total = desk.saved().len()?;
    let label = if saved {
        "Post saved successfully!"
    } else {
        "Post removed from saved"
    };
    ctx.render(
        CommandResultViewModel::new(SavedToggleView { id, saved, total })
            .with_badge(StatusBadge::info(label)),
    )
}

pub fn list(desk: &QuoteDesk, ctx: &HandlerContext) -> Result<()> {
    let ids = desk.saved().list()?;
    let posts = desk.community().saved_posts()?;
    let mut view_model = CommandResultViewModel::new(SavedListView { ids, posts });
    if view_model.content.ids.is_empty() {
        view_model = view_model
            .with_suggestion(Guidance::new("Browse the feed").with_command("quotedesk post list"));
    }
    ctx.render(view_model)
}
