use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque post identifier, assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a post. Both name parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: Option<String>,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Write every key present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: &PostPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = Some(content.clone());
        }
        if let Some(first_name) = &patch.first_name {
            self.author.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &patch.last_name {
            self.author.last_name = Some(last_name.clone());
        }
    }
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub author: Author,
    /// Creation time; the store uses the current time when absent.
    pub created: Option<DateTime<Utc>>,
}

impl NewPost {
    /// Build a new post, rejecting a missing or empty title.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Author,
        created: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let title = match title {
            Some(title) if !title.is_empty() => title,
            _ => {
                return Err(DomainError::Validation(
                    "Missing `title` in request body".to_string(),
                ));
            }
        };

        Ok(Self {
            title,
            content,
            author,
            created,
        })
    }

    /// Attach a store-generated id, defaulting `created` to now.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}

/// The keys supplied by an update request. Absent keys are not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

/// External representation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

/// Display name of an author: first and last name joined by a space, trimmed.
pub fn author_name(author: &Author) -> String {
    let first = author.first_name.as_deref().unwrap_or("");
    let last = author.last_name.as_deref().unwrap_or("");
    format!("{first} {last}").trim().to_string()
}

/// Project a stored post onto its external representation.
pub fn serialize(post: &Post) -> PostView {
    PostView {
        id: post.id.clone(),
        title: post.title.clone(),
        author: author_name(&post.author),
        content: post.content.clone(),
        created: post.created,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: Option<&str>, last: Option<&str>) -> Author {
        Author {
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    fn sample_post() -> Post {
        Post {
            id: PostId::new("abc123"),
            title: "Title".to_string(),
            content: Some("Body".to_string()),
            author: author(Some("Ada"), Some("Lovelace")),
            created: Utc::now(),
        }
    }

    #[test]
    fn test_author_name_joins_both_parts() {
        assert_eq!(author_name(&author(Some("Ada"), Some("Lovelace"))), "Ada Lovelace");
    }

    #[test]
    fn test_author_name_trims_missing_parts() {
        assert_eq!(author_name(&author(Some("Ada"), None)), "Ada");
        assert_eq!(author_name(&author(None, Some("Lovelace"))), "Lovelace");
        assert_eq!(author_name(&author(None, None)), "");
    }

    #[test]
    fn test_author_name_trims_surrounding_whitespace() {
        assert_eq!(author_name(&author(Some("  Ada"), Some("Lovelace "))), "Ada Lovelace");
    }

    #[test]
    fn test_serialize_uses_derived_author() {
        let post = sample_post();
        let view = serialize(&post);

        assert_eq!(view.id, post.id);
        assert_eq!(view.title, "Title");
        assert_eq!(view.content.as_deref(), Some("Body"));
        assert_eq!(view.author, "Ada Lovelace");
        assert_eq!(view.created, post.created);
    }

    #[test]
    fn test_serialize_json_shape() {
        let mut post = sample_post();
        post.content = None;

        let json = serde_json::to_value(serialize(&post)).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["id"], "abc123");
        assert_eq!(obj["author"], "Ada Lovelace");
        assert!(!obj.contains_key("content"));
        assert!(obj["created"].is_string());
    }

    #[test]
    fn test_new_post_requires_title() {
        let missing = NewPost::new(None, None, Author::default(), None);
        assert!(matches!(missing, Err(DomainError::Validation(msg)) if msg.contains("title")));

        let empty = NewPost::new(Some(String::new()), None, Author::default(), None);
        assert!(matches!(empty, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_into_post_defaults_created() {
        let before = Utc::now();
        let post = NewPost::new(Some("T".to_string()), None, Author::default(), None)
            .unwrap()
            .into_post(PostId::new("1"));

        assert!(post.created >= before);
        assert_eq!(post.title, "T");
    }

    #[test]
    fn test_into_post_keeps_supplied_created() {
        let created = "2020-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let post = NewPost::new(Some("T".to_string()), None, Author::default(), Some(created))
            .unwrap()
            .into_post(PostId::new("1"));

        assert_eq!(post.created, created);
    }

    #[test]
    fn test_apply_only_touches_present_keys() {
        let mut post = sample_post();
        let original = post.clone();

        post.apply(&PostPatch {
            title: Some("New title".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "New title");
        assert_eq!(post.content, original.content);
        assert_eq!(post.author, original.author);
        assert_eq!(post.created, original.created);
    }

    #[test]
    fn test_apply_merges_author_parts() {
        let mut post = sample_post();

        post.apply(&PostPatch {
            last_name: Some("Byron".to_string()),
            ..Default::default()
        });

        assert_eq!(post.author.first_name.as_deref(), Some("Ada"));
        assert_eq!(post.author.last_name.as_deref(), Some("Byron"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(PostPatch::default().is_empty());
        assert!(!PostPatch {
            content: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
    }
}
