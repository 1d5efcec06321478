use anyhow::Result;
use quotedesk_core::RegistrationForm;
use quotedesk_runtime::QuoteDesk;
use quotedesk_types::Role;

use super::HandlerContext;
use crate::presentation::views::{RegistrationView, SessionView};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

fn dashboard_command(role: Role) -> &'static str {
    match role {
        Role::Client => "quotedesk quote list --mine",
        Role::Contractor => "quotedesk quote list",
    }
}

pub fn login(
    desk: &QuoteDesk,
    ctx: &HandlerContext,
    email: &str,
    password: &str,
    role: Role,
) -> Result<()> {
    let name = desk
        .auth()
        .login(email, password, role)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let label = match role {
        Role::Client => "Client login successful!",
        Role::Contractor => "Login successful!",
    };
    ctx.render(
        CommandResultViewModel::new(SessionView {
            role,
            display_name: name.clone(),
            name: Some(name),
        })
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Open the dashboard").with_command(dashboard_command(role))),
    )
}

pub fn logout(desk: &QuoteDesk, ctx: &HandlerContext, role: Role) -> Result<()> {
    desk.auth().logout(role)?;
    ctx.render(
        CommandResultViewModel::new(SessionView {
            role,
            name: None,
            display_name: role.default_display_name().to_string(),
        })
        .with_badge(StatusBadge::success("Logged out successfully!")),
    )
}

pub fn whoami(desk: &QuoteDesk, ctx: &HandlerContext, role: Role) -> Result<()> {
    let name = desk.auth().current(role)?;
    let display_name = name
        .clone()
        .unwrap_or_else(|| role.default_display_name().to_string());
    ctx.render(CommandResultViewModel::new(SessionView {
        role,
        name,
        display_name,
    }))
}

pub fn register(desk: &QuoteDesk, ctx: &HandlerContext, form: RegistrationForm) -> Result<()> {
    let registration = desk.auth().register(&form)?;
    ctx.render(
        CommandResultViewModel::new(RegistrationView { registration })
            .with_badge(StatusBadge::success(
                "Registration successful! Please login with your credentials.",
            ))
            .with_suggestion(
                Guidance::new("Log in with the demo credentials")
                    .with_command("quotedesk login --email <EMAIL> --password <PASSWORD>"),
            ),
    )
}
