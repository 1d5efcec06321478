use anyhow::Result;
use quotedesk_runtime::{QuoteDesk, Submission};
use quotedesk_store::{FeedScope, PostFilter};
use quotedesk_types::{PostCategory, RequestId, Role};

use super::HandlerContext;
use crate::presentation::views::{PostListView, PostView};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub fn create(
    desk: &QuoteDesk,
    ctx: &HandlerContext,
    role: Role,
    content: &str,
    category: PostCategory,
    tags: &str,
) -> Result<()> {
    let submission = desk
        .community()
        .create(role, content, category, tags)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    match submission {
        Submission::Saved(post) => ctx.render(
            CommandResultViewModel::new(PostView { post })
                .with_badge(StatusBadge::success(
                    "Post created successfully! Visible to all users.",
                )),
        ),
        Submission::NotPersisted { record, error } => {
            let id = record.id;
            ctx.render(
                CommandResultViewModel::new(PostView { post: record })
                    .with_badge(StatusBadge::error("Post was NOT saved")),
            )?;
            anyhow::bail!("could not save post {}: {}", id, error)
        }
    }
}

pub fn list(
    desk: &QuoteDesk,
    ctx: &HandlerContext,
    search: Option<String>,
    tag: Option<String>,
    scope: FeedScope,
) -> Result<()> {
    let filter = PostFilter {
        query: search,
        tag,
        scope,
    };
    let posts = desk.community().feed(&filter)?;

    let mut view_model = CommandResultViewModel::new(PostListView { posts });
    if view_model.content.posts.is_empty() {
        let hint = if filter.tag.is_some() {
            "No posts found with this tag."
        } else {
            "Try adjusting your search or filters"
        };
        view_model = view_model.with_suggestion(Guidance::new(hint).with_command("quotedesk post list"));
    }
    ctx.render(view_model)
}

pub fn like(desk: &QuoteDesk, ctx: &HandlerContext, role: Role, id: u64) -> Result<()> {
    let post = desk
        .community()
        .toggle_like(role, RequestId::new(id))
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    ctx.render(CommandResultViewModel::new(PostView { post }))
}

pub fn comment(desk: &QuoteDesk, ctx: &HandlerContext, role: Role, id: u64, text: &str) -> Result<()> {
    let post = desk
        .community()
        .comment(role, RequestId::new(id), text)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    ctx.render(
        CommandResultViewModel::new(PostView { post })
            .with_badge(StatusBadge::success("Comment added successfully!")),
    )
}
