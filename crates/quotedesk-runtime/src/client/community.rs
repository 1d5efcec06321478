use quotedesk_core::{CommunityError, FeedAction, validate_comment, validate_post};
use quotedesk_store::{PostFilter, PostStore};
use quotedesk_types::{Comment, Post, PostCategory, RequestId, Role};
use std::collections::BTreeMap;

use super::{QuoteDesk, Submission};
use crate::Result;

/// Stored in place of a real time on new posts and comments.
const JUST_NOW: &str = "Just now";

/// Community feed. Writing needs a logged-in name for the acting role;
/// reading does not.
pub struct CommunityOps<'a> {
    desk: &'a QuoteDesk,
}

impl<'a> CommunityOps<'a> {
    pub(super) fn new(desk: &'a QuoteDesk) -> Self {
        Self { desk }
    }

    fn store(&self) -> PostStore<'a> {
        PostStore::new(self.desk.store())
    }

    fn author(&self, role: Role, action: FeedAction) -> Result<String> {
        self.desk
            .sessions()
            .get(role)?
            .ok_or(CommunityError::LoginRequired(action).into())
    }

    /// Publish a post as the logged-in `role`. Images are not supported.
    pub fn create(
        &self,
        role: Role,
        content: &str,
        category: PostCategory,
        tags: &str,
    ) -> Result<Submission<Post>> {
        let author = self.author(role, FeedAction::Post)?;
        let draft = validate_post(content, category, tags)?;

        let post = Post {
            id: RequestId::from_datetime(self.desk.clock().now()),
            author,
            user_type: role.community_name().to_string(),
            avatar: role.avatar().to_string(),
            timestamp: JUST_NOW.to_string(),
            category: draft.category.as_str().to_string(),
            content: draft.content,
            tags: draft.tags,
            images: Vec::new(),
            likes: 0,
            comments: Vec::new(),
            liked: false,
            extra: BTreeMap::new(),
        };

        Ok(match self.store().create(post.clone()) {
            Ok(stored) => {
                tracing::info!(id = %stored.id, author = %stored.author, "community post created");
                Submission::Saved(stored)
            }
            Err(err) => {
                tracing::error!(id = %post.id, error = %err, "failed to save community post");
                Submission::NotPersisted {
                    record: post,
                    error: err.to_string(),
                }
            }
        })
    }

    pub fn toggle_like(&self, role: Role, id: RequestId) -> Result<Post> {
        self.author(role, FeedAction::Like)?;
        Ok(self.store().toggle_like(id)?)
    }

    pub fn comment(&self, role: Role, id: RequestId, text: &str) -> Result<Post> {
        let author = self.author(role, FeedAction::Comment)?;
        let text = validate_comment(text)?;

        let updated = self.store().add_comment(
            id,
            Comment {
                author,
                user_type: Some(role.community_name().to_string()),
                text,
                time: JUST_NOW.to_string(),
            },
        )?;
        tracing::info!(id = %id, comments = updated.comments.len(), "comment added");
        Ok(updated)
    }

    pub fn feed(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        Ok(self.store().list(filter)?)
    }

    pub fn get(&self, id: RequestId) -> Result<Option<Post>> {
        Ok(self.store().get(id)?)
    }

    /// Feed posts whose ids are in the saved list, in feed order. Saved ids
    /// without a post are skipped.
    pub fn saved_posts(&self) -> Result<Vec<Post>> {
        let saved = self.desk.saved().list()?;
        Ok(self
            .feed(&PostFilter::default())?
            .into_iter()
            .filter(|p| saved.contains(&p.id.as_u64()))
            .collect())
    }
}
