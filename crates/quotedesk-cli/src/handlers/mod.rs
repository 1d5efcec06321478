mod context;

pub mod chat;
pub mod email;
pub mod init;
pub mod overview;
pub mod post;
pub mod quote;
pub mod saved;
pub mod session;
pub mod support;

pub use context::HandlerContext;

/// Shown after a quote request is stored.
pub const QUOTE_THANKS: &str =
    "Thank you! Your quote request has been sent successfully. We will contact you shortly.";

/// Shown after a support message is stored.
pub const SUPPORT_THANKS: &str =
    "Thank you! Your message has been sent successfully. We will respond within 24 hours.";
