use quotedesk_types::{Comment, Post, PostCategory, RequestId, Role};

use crate::{Error, KeyValueStore, Result, collection, keys};

/// Feed tabs: everything, one kind of author, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedScope {
    #[default]
    All,
    Members(Role),
    Category(PostCategory),
}

/// Search box, tag chip and feed tab combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub query: Option<String>,
    pub tag: Option<String>,
    pub scope: FeedScope,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        let in_scope = match self.scope {
            FeedScope::All => true,
            FeedScope::Members(role) => post.user_type == role.community_name(),
            FeedScope::Category(category) => post.category == category.as_str(),
        };

        in_scope
            && self.query.as_deref().is_none_or(|q| post.matches_query(q))
            && self.tag.as_deref().is_none_or(|t| post.has_tag(t))
    }
}

/// The community feed, newest first.
pub struct PostStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> PostStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    pub fn list(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        Ok(collection::read::<Post>(self.kv, keys::COMMUNITY_POSTS)?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    pub fn get(&self, id: RequestId) -> Result<Option<Post>> {
        Ok(collection::read::<Post>(self.kv, keys::COMMUNITY_POSTS)?
            .into_iter()
            .find(|p| p.id == id))
    }

    /// Prepend a post. Its id may be moved past the newest stored id.
    pub fn create(&self, mut post: Post) -> Result<Post> {
        let mut posts = collection::load::<Post>(self.kv, keys::COMMUNITY_POSTS)?;
        let existing = posts.records().map(|p| p.id).chain(posts.unreadable_ids());
        post.id = collection::next_id(existing, post.id);
        posts.prepend(post.clone());
        collection::store(self.kv, keys::COMMUNITY_POSTS, &posts)?;
        Ok(post)
    }

    pub fn toggle_like(&self, id: RequestId) -> Result<Post> {
        self.update(id, Post::toggle_like)
    }

    /// Append to the post's comment thread, oldest first.
    pub fn add_comment(&self, id: RequestId, comment: Comment) -> Result<Post> {
        self.update(id, |post| post.comments.push(comment))
    }

    fn update(&self, id: RequestId, change: impl FnOnce(&mut Post)) -> Result<Post> {
        let mut posts = collection::load::<Post>(self.kv, keys::COMMUNITY_POSTS)?;
        let post = posts
            .records_mut()
            .find(|p| p.id == id)
            .ok_or(Error::PostNotFound(id))?;

        change(post);
        let updated = post.clone();
        collection::store(self.kv, keys::COMMUNITY_POSTS, &posts)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use std::collections::BTreeMap;

    fn post(id: u64, role: Role, category: PostCategory, content: &str, tags: &[&str]) -> Post {
        Post {
            id: RequestId::new(id),
            author: format!("{} author", role),
            user_type: role.community_name().to_string(),
            avatar: role.avatar().to_string(),
            timestamp: "Just now".to_string(),
            category: category.as_str().to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            images: Vec::new(),
            likes: 0,
            comments: Vec::new(),
            liked: false,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_create_prepends_with_increasing_ids() {
        let kv = MemoryStore::new();
        let store = PostStore::new(&kv);

        let first = store
            .create(post(100, Role::Contractor, PostCategory::Project, "Villa", &[]))
            .unwrap();
        let second = store
            .create(post(100, Role::Client, PostCategory::Question, "Budget?", &[]))
            .unwrap();

        assert_eq!(second.id, first.id.next());
        let listed = store.list(&PostFilter::default()).unwrap();
        assert_eq!(listed[0].content, "Budget?");
        assert_eq!(listed[1].content, "Villa");
    }

    #[test]
    fn test_filters_combine() {
        let kv = MemoryStore::new();
        let store = PostStore::new(&kv);
        store
            .create(post(1, Role::Contractor, PostCategory::Project, "Smart villa", &["Luxury"]))
            .unwrap();
        store
            .create(post(2, Role::Client, PostCategory::Discussion, "Renovation budget", &["Commercial"]))
            .unwrap();
        store
            .create(post(3, Role::Contractor, PostCategory::Update, "Villa pool done", &["Luxury", "Pool"]))
            .unwrap();

        let engineers = PostFilter {
            scope: FeedScope::Members(Role::Contractor),
            ..Default::default()
        };
        assert_eq!(store.list(&engineers).unwrap().len(), 2);

        let villa_projects = PostFilter {
            query: Some("VILLA".to_string()),
            scope: FeedScope::Category(PostCategory::Project),
            ..Default::default()
        };
        let found = store.list(&villa_projects).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "Smart villa");

        let tagged = PostFilter {
            tag: Some("#pool".to_string()),
            ..Default::default()
        };
        assert_eq!(store.list(&tagged).unwrap()[0].content, "Villa pool done");
    }

    #[test]
    fn test_like_and_comment_persist() {
        let kv = MemoryStore::new();
        let store = PostStore::new(&kv);
        let created = store
            .create(post(7, Role::Contractor, PostCategory::Project, "Deck", &[]))
            .unwrap();

        assert_eq!(store.toggle_like(created.id).unwrap().likes, 1);
        store
            .add_comment(
                created.id,
                Comment {
                    author: "client".to_string(),
                    user_type: Some("client".to_string()),
                    text: "Nice".to_string(),
                    time: "Just now".to_string(),
                },
            )
            .unwrap();

        let reloaded = store.get(created.id).unwrap().unwrap();
        assert!(reloaded.liked);
        assert_eq!(reloaded.comments[0].text, "Nice");

        let err = store.toggle_like(RequestId::new(999)).unwrap_err();
        assert!(matches!(err, Error::PostNotFound(id) if id == RequestId::new(999)));
    }
}
