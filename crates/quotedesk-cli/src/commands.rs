use super::args::{
    Cli, Commands, EmailCommand, PostCommand, QuoteCommand, SavedCommand, SupportCommand,
};
use super::handlers::{self, HandlerContext};
use anyhow::{Context, Result};
use quotedesk_core::RegistrationForm;
use quotedesk_runtime::QuoteDesk;
use quotedesk_runtime::config::resolve_workspace_path;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    quotedesk_runtime::init_logging(&cli.log_level.to_string())?;

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(cli.format);
    tracing::debug!(data_dir = %data_dir.display(), format = %cli.format, "starting");

    let Some(command) = cli.command else {
        let desk = open_desk(&data_dir)?;
        return handlers::overview::handle(&desk, &ctx, &data_dir);
    };

    match command {
        Commands::Init { force } => handlers::init::handle(&ctx, &data_dir, force),

        Commands::Email { command } => match command {
            EmailCommand::Check { email } => handlers::email::check(&ctx, &email),
        },

        Commands::Quote { command } => {
            let desk = open_desk(&data_dir)?;
            match command {
                QuoteCommand::Submit { fields, as_client } => {
                    handlers::quote::submit(&desk, &ctx, &fields, as_client)
                }
                QuoteCommand::List {
                    client,
                    mine,
                    status,
                } => handlers::quote::list(&desk, &ctx, client, mine, status.map(Into::into)),
                QuoteCommand::Complete { id } => handlers::quote::complete(&desk, &ctx, id),
                QuoteCommand::Export { output, client } => {
                    handlers::quote::export(&desk, &ctx, output, client)
                }
            }
        }

        Commands::Support { command } => {
            let desk = open_desk(&data_dir)?;
            match command {
                SupportCommand::Submit { fields } => handlers::support::submit(&desk, &ctx, &fields),
                SupportCommand::List => handlers::support::list(&desk, &ctx),
            }
        }

        Commands::Post { command } => {
            let desk = open_desk(&data_dir)?;
            match command {
                PostCommand::Create {
                    content,
                    category,
                    tags,
                    role,
                } => handlers::post::create(&desk, &ctx, role.into(), &content, category.into(), &tags),
                PostCommand::List { search, tag, feed } => {
                    handlers::post::list(&desk, &ctx, search, tag, feed.into())
                }
                PostCommand::Like { id, role } => handlers::post::like(&desk, &ctx, role.into(), id),
                PostCommand::Comment { id, text, role } => {
                    handlers::post::comment(&desk, &ctx, role.into(), id, &text)
                }
            }
        }

        Commands::Saved { command } => {
            let desk = open_desk(&data_dir)?;
            match command {
                SavedCommand::Toggle { id } => handlers::saved::toggle(&desk, &ctx, id),
                SavedCommand::List => handlers::saved::list(&desk, &ctx),
            }
        }

        Commands::Login {
            email,
            password,
            role,
        } => {
            let desk = open_desk(&data_dir)?;
            handlers::session::login(&desk, &ctx, &email, &password, role.into())
        }

        Commands::Logout { role } => {
            let desk = open_desk(&data_dir)?;
            handlers::session::logout(&desk, &ctx, role.into())
        }

        Commands::Whoami { role } => {
            let desk = open_desk(&data_dir)?;
            handlers::session::whoami(&desk, &ctx, role.into())
        }

        Commands::Register {
            name,
            email,
            phone,
            password,
            confirm_password,
            role,
        } => {
            let desk = open_desk(&data_dir)?;
            let form = RegistrationForm {
                name,
                email,
                phone,
                password,
                confirm_password,
                role: role.into(),
            };
            handlers::session::register(&desk, &ctx, form)
        }

        Commands::Chat { message } => {
            let desk = open_desk(&data_dir)?;
            handlers::chat::handle(&desk, &ctx, &message)
        }
    }
}

fn open_desk(data_dir: &Path) -> Result<QuoteDesk> {
    QuoteDesk::open(data_dir)
        .with_context(|| format!("failed to open workspace at {}", data_dir.display()))
}
