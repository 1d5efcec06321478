use quotedesk_types::{PostCategory, parse_tags};
use std::fmt;

/// Feed actions that need someone logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    Post,
    Like,
    Comment,
}

/// Why a feed action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityError {
    LoginRequired(FeedAction),
    EmptyPost,
    EmptyComment,
}

impl CommunityError {
    pub fn message(&self) -> &'static str {
        match self {
            CommunityError::LoginRequired(FeedAction::Post) => "Please log in to post!",
            CommunityError::LoginRequired(FeedAction::Like) => "Please log in to like posts!",
            CommunityError::LoginRequired(FeedAction::Comment) => "Please log in to comment!",
            CommunityError::EmptyPost => "Please write something to post!",
            CommunityError::EmptyComment => "Please write a comment first.",
        }
    }
}

impl fmt::Display for CommunityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CommunityError {}

/// A post that passed the composer's checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub content: String,
    pub category: PostCategory,
    pub tags: Vec<String>,
}

/// Trim the text and split the comma-separated tags.
pub fn validate_post(
    content: &str,
    category: PostCategory,
    tags: &str,
) -> Result<PostDraft, CommunityError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CommunityError::EmptyPost);
    }

    Ok(PostDraft {
        content: content.to_string(),
        category,
        tags: parse_tags(tags),
    })
}

pub fn validate_comment(text: &str) -> Result<String, CommunityError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommunityError::EmptyComment);
    }
    Ok(text.to_string())
}
