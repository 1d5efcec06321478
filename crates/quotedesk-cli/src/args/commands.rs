use super::enums::{CategoryArg, FeedArg, RoleArg, StatusArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Submit and review quote requests")]
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },

    #[command(about = "Send and review support messages")]
    Support {
        #[command(subcommand)]
        command: SupportCommand,
    },

    #[command(about = "Community feed: share posts, like and comment")]
    Post {
        #[command(subcommand)]
        command: PostCommand,
    },

    #[command(about = "Manage saved community posts")]
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },

    #[command(about = "Log in with demo credentials")]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value = "client")]
        role: RoleArg,
    },

    #[command(about = "Forget the logged-in name for a role")]
    Logout {
        #[arg(long, default_value = "client")]
        role: RoleArg,
    },

    #[command(about = "Show who is logged in for a role")]
    Whoami {
        #[arg(long, default_value = "client")]
        role: RoleArg,
    },

    #[command(about = "Validate a registration form (accounts are not stored)")]
    Register {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,

        #[arg(long, default_value = "client")]
        role: RoleArg,
    },

    #[command(about = "Email address helpers")]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },

    #[command(about = "Ask the FAQ assistant")]
    Chat {
        /// Question for the assistant; omit to list suggested questions
        message: Vec<String>,
    },

    #[command(about = "Write a default config.toml into the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum QuoteCommand {
    #[command(about = "Submit a quote request form")]
    Submit {
        #[arg(
            long = "field",
            value_name = "KEY=VALUE",
            help = "Form field, repeatable (name, email, phone, area_size, budget, project_details, ...)"
        )]
        fields: Vec<String>,

        #[arg(long, help = "Submit from the client dashboard (phone required, owned by the logged-in client)")]
        as_client: bool,
    },

    #[command(about = "List quote requests, newest first")]
    List {
        #[arg(long, conflicts_with = "mine", help = "Only requests owned by this client")]
        client: Option<String>,

        #[arg(long, help = "Only requests owned by the logged-in client")]
        mine: bool,

        #[arg(long, conflicts_with_all = ["client", "mine"])]
        status: Option<StatusArg>,
    },

    #[command(about = "Mark a quote request completed")]
    Complete {
        #[arg(help = "Request id")]
        id: u64,
    },

    #[command(about = "Export quote requests as CSV")]
    Export {
        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long)]
        client: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SupportCommand {
    #[command(about = "Send a support message")]
    Submit {
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    #[command(about = "List support messages, newest first")]
    List,
}

#[derive(Subcommand)]
pub enum PostCommand {
    #[command(about = "Share a post as the logged-in user")]
    Create {
        #[arg(long)]
        content: String,

        #[arg(long, default_value = "discussion")]
        category: CategoryArg,

        #[arg(long, default_value = "", help = "Comma-separated tags")]
        tags: String,

        #[arg(long, default_value = "client")]
        role: RoleArg,
    },

    #[command(about = "List the feed, newest first")]
    List {
        #[arg(long, help = "Match content, author or tags")]
        search: Option<String>,

        #[arg(long, help = "Only posts with a matching tag")]
        tag: Option<String>,

        #[arg(long, default_value = "all")]
        feed: FeedArg,
    },

    #[command(about = "Like a post, or unlike it if already liked")]
    Like {
        id: u64,

        #[arg(long, default_value = "client")]
        role: RoleArg,
    },

    #[command(about = "Comment on a post")]
    Comment {
        id: u64,

        #[arg(long)]
        text: String,

        #[arg(long, default_value = "client")]
        role: RoleArg,
    },
}

#[derive(Subcommand)]
pub enum SavedCommand {
    #[command(about = "Save a post, or unsave it if already saved")]
    Toggle { id: u64 },

    #[command(about = "List saved posts")]
    List,
}

#[derive(Subcommand)]
pub enum EmailCommand {
    #[command(about = "Check an address the way the signup form does")]
    Check { email: String },
}
