use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Error, RequestId, Role};

/// What a community post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    Project,
    #[default]
    Discussion,
    Question,
    Update,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Project => "project",
            PostCategory::Discussion => "discussion",
            PostCategory::Question => "question",
            PostCategory::Update => "update",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::Project => "Project Showcase",
            PostCategory::Discussion => "Discussion",
            PostCategory::Question => "Question",
            PostCategory::Update => "Update",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "project" => Ok(PostCategory::Project),
            "discussion" => Ok(PostCategory::Discussion),
            "question" => Ok(PostCategory::Question),
            "update" => Ok(PostCategory::Update),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub author: String,

    /// `engineer` or `client`; early comments were stored without it.
    #[serde(rename = "userType", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    #[serde(default)]
    pub text: String,

    /// Relative wording as shown on the page, e.g. "Just now".
    #[serde(default)]
    pub time: String,
}

/// A community feed entry as stored in `communityPosts`.
///
/// `category` and `userType` stay plain strings so posts written by other
/// pages load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RequestId,

    #[serde(default)]
    pub author: String,

    #[serde(rename = "userType", default)]
    pub user_type: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub likes: i64,

    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default)]
    pub liked: bool,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Post {
    /// Display name of the category; unknown categories show as stored.
    pub fn category_label(&self) -> &str {
        match self.category.parse::<PostCategory>() {
            Ok(category) => category.label(),
            Err(_) => &self.category,
        }
    }

    pub fn author_role(&self) -> Option<Role> {
        self.user_type.parse().ok()
    }

    /// Case-insensitive match on content, author or any tag. A blank query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.content.to_lowercase().contains(&query)
            || self.author.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    /// Whether any tag contains `tag`, ignoring case and a leading `#`.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().trim_start_matches('#').to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase().contains(&tag))
    }

    /// Flip `liked` and move the like count with it.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        self.likes = if self.liked {
            self.likes.saturating_add(1)
        } else {
            self.likes.saturating_sub(1).max(0)
        };
    }
}

/// Split comma-separated tag input, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
