//! Request handlers
//!
//! Thin plumbing: parse input, invoke a service, map the result.

pub mod follows;
pub mod health;
pub mod likes;
pub mod medias;
pub mod tweets;
pub mod users;
