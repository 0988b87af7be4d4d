//! Post persistence - MongoDB document store and in-memory fallback.

mod config;
mod memory;

#[cfg(feature = "mongodb")]
mod connections;
#[cfg(feature = "mongodb")]
pub mod entity;
#[cfg(feature = "mongodb")]
mod mongo_repo;


pub use config::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use connections::DocumentStore;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;
