//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional at the wire level so that required-field
//! checks produce a descriptive 400 instead of a deserialization error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author names as submitted by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorRequest>,
    pub created: Option<DateTime<Utc>>,
}

/// Request to update a post. `id` must repeat the id in the URL path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorRequest>,
}
