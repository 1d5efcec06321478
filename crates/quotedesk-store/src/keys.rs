//! Storage keys shared with the website's pages.

pub const QUOTE_REQUESTS: &str = "quoteRequests";
pub const SUPPORT_REQUESTS: &str = "supportRequests";
pub const COMMUNITY_POSTS: &str = "communityPosts";
pub const SAVED_POSTS: &str = "savedPosts";
pub const CLIENT_NAME: &str = "clientName";
pub const CONTRACTOR_NAME: &str = "contractorName";
