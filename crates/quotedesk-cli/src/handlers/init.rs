use anyhow::{Context, Result};
use quotedesk_runtime::Config;
use std::path::Path;

use super::HandlerContext;
use crate::presentation::views::InitView;
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub fn handle(ctx: &HandlerContext, data_dir: &Path, force: bool) -> Result<()> {
    let config_path = data_dir.join("config.toml");

    let written = if config_path.exists() && !force {
        false
    } else {
        Config::default()
            .save_to(&config_path)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        tracing::info!(path = %config_path.display(), "wrote default config");
        true
    };

    let badge = if written {
        StatusBadge::success("Initialized")
    } else {
        StatusBadge::info("Already initialized")
    };
    ctx.render(
        CommandResultViewModel::new(InitView {
            config_path,
            written,
        })
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Submit a first request")
                .with_command("quotedesk quote submit --field email=you@example.com"),
        ),
    )
}
