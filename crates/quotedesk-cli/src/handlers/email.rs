use anyhow::Result;
use quotedesk_core::email_feedback;

use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::views::EmailCheckView;

/// Live email hint. An invalid address is a failed check, not a crash.
pub fn check(ctx: &HandlerContext, email: &str) -> Result<()> {
    let feedback = email_feedback(email);
    ctx.render(CommandResultViewModel::new(EmailCheckView::new(email, feedback)))?;

    if !feedback.is_valid() {
        anyhow::bail!("invalid email address: {}", email.trim());
    }
    Ok(())
}
