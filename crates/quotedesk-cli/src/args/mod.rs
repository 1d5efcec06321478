mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "quotedesk")]
#[command(about = "Submit, review and complete contractor quote requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory; falls back to QUOTEDESK_PATH, then the platform data dir
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
