use clap::ValueEnum;
use quotedesk_store::FeedScope;
use quotedesk_types::{PostCategory, RequestStatus, Role};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RoleArg {
    Client,
    #[value(alias = "engineer")]
    Contractor,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Client => Role::Client,
            RoleArg::Contractor => Role::Contractor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusArg {
    Pending,
    Completed,
}

impl From<StatusArg> for RequestStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => RequestStatus::Pending,
            StatusArg::Completed => RequestStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CategoryArg {
    Project,
    Discussion,
    Question,
    Update,
}

impl From<CategoryArg> for PostCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Project => PostCategory::Project,
            CategoryArg::Discussion => PostCategory::Discussion,
            CategoryArg::Question => PostCategory::Question,
            CategoryArg::Update => PostCategory::Update,
        }
    }
}

/// Feed tab: author kind or post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FeedArg {
    All,
    Engineer,
    Client,
    Project,
    Discussion,
    Question,
    Update,
}

impl From<FeedArg> for FeedScope {
    fn from(feed: FeedArg) -> Self {
        match feed {
            FeedArg::All => FeedScope::All,
            FeedArg::Engineer => FeedScope::Members(Role::Contractor),
            FeedArg::Client => FeedScope::Members(Role::Client),
            FeedArg::Project => FeedScope::Category(PostCategory::Project),
            FeedArg::Discussion => FeedScope::Category(PostCategory::Discussion),
            FeedArg::Question => FeedScope::Category(PostCategory::Question),
            FeedArg::Update => FeedScope::Category(PostCategory::Update),
        }
    }
}
