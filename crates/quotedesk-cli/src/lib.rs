// NOTE: Command Organization
//
// Each browser page maps to a namespace: `quote` (homepage form and both
// dashboards), `support` (contact form), `post` (community feed) and
// `saved` (feed bookmarks).
// Session and account pages are top-level verbs (`login`, `logout`,
// `whoami`, `register`). Handlers only translate arguments; every rule
// lives in quotedesk-core / quotedesk-runtime.

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{
    CategoryArg, Cli, Commands, EmailCommand, FeedArg, LogLevel, OutputFormat, PostCommand,
    QuoteCommand, RoleArg, SavedCommand, StatusArg, SupportCommand,
};
pub use commands::run;
