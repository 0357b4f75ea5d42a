//! Business operations over the connection pool.
//!
//! Services are plain async functions taking the pool (and, where hashing or
//! signing is involved, the `AuthConfig`). They are composed by the route
//! handlers; nothing here knows about HTTP.

pub mod auth;
pub mod cards;
pub mod columns;
pub mod comments;
pub mod users;
