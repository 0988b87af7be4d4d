//! Domain entities - the core business objects.

mod post;

pub use post::{Author, NewPost, Post, PostId, PostPatch, PostView, author_name, serialize};
