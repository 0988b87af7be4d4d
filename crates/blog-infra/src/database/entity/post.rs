//! Post document for MongoDB.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Author, NewPost, Post, PostId, PostPatch};
use blog_core::error::RepoError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub author: AuthorDocument,
    pub created: bson::DateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl PostDocument {
    /// Build the document to insert, generating its `_id` and defaulting
    /// `created` to now. Timestamps are stored with millisecond precision.
    pub fn from_new(post: NewPost) -> Self {
        let created = post.created.unwrap_or_else(Utc::now);

        Self {
            id: ObjectId::new(),
            title: post.title,
            content: post.content,
            author: AuthorDocument {
                first_name: post.author.first_name,
                last_name: post.author.last_name,
            },
            created: bson::DateTime::from_millis(created.timestamp_millis()),
        }
    }
}

/// Conversion from stored document to domain Post.
impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(document: PostDocument) -> Result<Self, Self::Error> {
        let millis = document.created.timestamp_millis();
        let created = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            RepoError::Serialization(format!("created timestamp out of range: {millis}"))
        })?;

        Ok(Self {
            id: PostId::new(document.id.to_hex()),
            title: document.title,
            content: document.content,
            author: Author {
                first_name: document.author.first_name,
                last_name: document.author.last_name,
            },
            created,
        })
    }
}

/// Parse a post id into an `ObjectId`. Ids that are not valid hex object ids
/// cannot match any stored document.
pub fn object_id(id: &PostId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

/// Build a `$set` update covering only the keys present in `patch`.
/// Nested author fields use dotted paths so the sibling name is kept.
pub fn set_document(patch: &PostPatch) -> Option<Document> {
    if patch.is_empty() {
        return None;
    }

    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &patch.content {
        set.insert("content", content.as_str());
    }
    if let Some(first_name) = &patch.first_name {
        set.insert("author.firstName", first_name.as_str());
    }
    if let Some(last_name) = &patch.last_name {
        set.insert("author.lastName", last_name.as_str());
    }

    Some(doc! { "$set": set })
}
