//! # Blog API
//!
//! Routes, state and middleware of the blog posts server. The binary in
//! `main.rs` wires these together; tests mount the same routes.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
