use anyhow::Result;
use quotedesk_runtime::{QuoteDesk, SUGGESTED_QUESTIONS, WELCOME_MESSAGE};

use super::HandlerContext;
use crate::presentation::views::{ChatView, ChatWelcomeView};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub fn handle(desk: &QuoteDesk, ctx: &HandlerContext, words: &[String]) -> Result<()> {
    if words.is_empty() {
        return welcome(ctx);
    }

    let message = words.join(" ");
    let Some(reply) = desk.chat().ask(&message) else {
        anyhow::bail!("message is empty");
    };

    let mut view_model = CommandResultViewModel::new(ChatView {
        reply: reply.text().to_string(),
        fallback: reply.is_fallback(),
    });
    if reply.is_fallback() {
        view_model = view_model.with_badge(StatusBadge::warning("Assistant unavailable"));
    }
    ctx.render(view_model)
}

fn welcome(ctx: &HandlerContext) -> Result<()> {
    let view_model = CommandResultViewModel::new(ChatWelcomeView {
        greeting: WELCOME_MESSAGE.to_string(),
        questions: SUGGESTED_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
    .with_suggestion(Guidance::new("Ask one").with_command(format!(
        "quotedesk chat \"{}\"",
        SUGGESTED_QUESTIONS[0]
    )));
    ctx.render(view_model)
}
