//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};

use blog_core::domain::{NewPost, Post, PostId, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use super::connections::DocumentStore;
use super::entity::post::{PostDocument, object_id, set_document};

/// MongoDB post repository.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.posts(),
        }
    }
}

fn repo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for MongoPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(repo_error)?;

        document.map(Post::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created": 1, "_id": 1 })
            .await
            .map_err(repo_error)?;

        let documents: Vec<PostDocument> = cursor.try_collect().await.map_err(repo_error)?;
        tracing::debug!(count = documents.len(), "Loaded posts");

        documents.into_iter().map(Post::try_from).collect()
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepoError> {
        let Some(oid) = object_id(id) else {
            tracing::debug!(post_id = %id, "Delete skipped for malformed id");
            return Ok(false);
        };

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(repo_error)?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let document = PostDocument::from_new(post);

        self.collection
            .insert_one(&document)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = %document.id, "Inserted post");
        Post::try_from(document)
    }

    async fn update(&self, id: &PostId, patch: PostPatch) -> Result<(), RepoError> {
        let Some(oid) = object_id(id) else {
            return Err(RepoError::NotFound);
        };
        let filter = doc! { "_id": oid };

        let matched = match set_document(&patch) {
            Some(update) => {
                self.collection
                    .update_one(filter, update)
                    .await
                    .map_err(repo_error)?
                    .matched_count
            }
            None => self
                .collection
                .count_documents(filter)
                .await
                .map_err(repo_error)?,
        };

        if matched == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Updated post");
        Ok(())
    }
}
