//! In-memory post repository - used when no document store is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostId, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order, which breaks ties when listing by
/// `created`. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|post| &post.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.store.read().await.clone();
        // Stable sort keeps insertion order for equal timestamps
        posts.sort_by_key(|post| post.created);
        Ok(posts)
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|post| &post.id != id);
        Ok(store.len() < before)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let post = post.into_post(PostId::new(Uuid::new_v4().to_string()));

        self.store.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Inserted post");

        Ok(post)
    }

    async fn update(&self, id: &PostId, patch: PostPatch) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .iter_mut()
            .find(|post| &post.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(&patch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Author;
    use chrono::{DateTime, Utc};

    fn new_post(title: &str, created: Option<DateTime<Utc>>) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: Some("Content".to_string()),
            author: Author {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
            },
            created,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("First", None)).await.unwrap();

        let found = repo.find_by_id(&post.id).await.unwrap();
        assert_eq!(found, Some(post));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = InMemoryPostRepository::new();
        let a = repo.insert(new_post("A", None)).await.unwrap();
        let b = repo.insert(new_post("B", None)).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_all_orders_by_created() {
        let repo = InMemoryPostRepository::new();
        let later = "2022-01-01T00:00:00Z".parse().unwrap();
        let earlier = "2021-01-01T00:00:00Z".parse().unwrap();

        repo.insert(new_post("Later", Some(later))).await.unwrap();
        repo.insert(new_post("Earlier", Some(earlier))).await.unwrap();
        repo.insert(new_post("Also earlier", Some(earlier))).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, ["Earlier", "Also earlier", "Later"]);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("Old", None)).await.unwrap();

        let patch = PostPatch {
            title: Some("New".to_string()),
            ..Default::default()
        };
        repo.update(&post.id, patch).await.unwrap();

        let stored = repo.find_by_id(&post.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "New");
        assert_eq!(stored.content, post.content);
        assert_eq!(stored.author, post.author);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update(&PostId::new("missing"), PostPatch::default())
            .await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("Doomed", None)).await.unwrap();

        assert!(repo.delete(&post.id).await.unwrap());
        assert!(!repo.delete(&post.id).await.unwrap());
        assert_eq!(repo.find_by_id(&post.id).await.unwrap(), None);
    }
}
