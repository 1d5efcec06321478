pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use chat::{
    ChatClient, ChatError, ChatReply, ChatTransport, FALLBACK_REPLY, HttpTransport,
    SUGGESTED_QUESTIONS, WELCOME_MESSAGE,
};
pub use client::{
    AuthOps, CommunityOps, Dashboard, QuoteDesk, QuoteOps, Submission, SupportOps,
};
pub use config::{AuthConfig, ChatConfig, Config, Credentials, DisplayConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
