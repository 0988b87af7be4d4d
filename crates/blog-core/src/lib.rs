//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the post record model and the persistence port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
