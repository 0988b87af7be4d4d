use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Generic repository trait defining the read and delete operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, RepoError>;

    /// Return every entity, oldest first.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID. Returns whether anything was removed;
    /// a missing entity is not an error.
    async fn delete(&self, id: &ID) -> Result<bool, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Store a new post, generating its id and defaulting `created`.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply a partial update. Fails with `RepoError::NotFound` when no post
    /// has the given id.
    async fn update(&self, id: &PostId, patch: PostPatch) -> Result<(), RepoError>;
}
