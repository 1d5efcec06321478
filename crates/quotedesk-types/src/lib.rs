pub mod error;
pub mod form;
pub mod number;
pub mod post;
pub mod request;
pub mod session;
pub mod support;

pub use error::{Error, Result};
pub use form::FormFields;
pub use number::parse_number;
pub use post::{Comment, Post, PostCategory, parse_tags};
pub use request::{QuoteRequest, RequestId, RequestStatus};
pub use session::Role;
pub use support::SupportRequest;
