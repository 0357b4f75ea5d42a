//! Ownership checks run by handlers before they touch a resource.
//!
//! Every guard follows the same steps: resolve the resource, compare its owning
//! user id with the principal, then allow or reject. A missing resource and a
//! resource owned by someone else produce the same `AppError::AccessDenied`, so
//! the response never reveals whether an id exists.

use crate::{
    auth::AuthenticatedUser,
    db::DbPool,
    error::AppError,
    models::{Card, Column, Comment},
    services::{cards, columns, comments},
};

/// A resource that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

impl Owned for Column {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Owned for Card {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Passes `resource` through if the principal owns it.
pub fn ensure_owner<R: Owned>(
    resource: Option<R>,
    principal: &AuthenticatedUser,
) -> Result<R, AppError> {
    match resource {
        Some(resource) if resource.owner_id() == principal.id => Ok(resource),
        _ => Err(AppError::access_denied()),
    }
}

/// Turns a lookup's `NotFound` into `None` so it can share the denial path.
fn found<R>(lookup: Result<R, AppError>) -> Result<Option<R>, AppError> {
    match lookup {
        Ok(resource) => Ok(Some(resource)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

fn deny(kind: &str, id: i64, principal: &AuthenticatedUser) -> AppError {
    log::warn!("user {} denied access to {} {}", principal.id, kind, id);
    AppError::access_denied()
}

pub async fn owned_column(
    pool: &DbPool,
    id: i64,
    principal: &AuthenticatedUser,
) -> Result<Column, AppError> {
    let column = found(columns::find_one(pool, id).await)?;
    ensure_owner(column, principal).map_err(|_| deny("column", id, principal))
}

pub async fn owned_card(
    pool: &DbPool,
    id: i64,
    principal: &AuthenticatedUser,
) -> Result<Card, AppError> {
    let card = found(cards::find_one(pool, id).await)?;
    ensure_owner(card, principal).map_err(|_| deny("card", id, principal))
}

pub async fn owned_comment(
    pool: &DbPool,
    id: i64,
    principal: &AuthenticatedUser,
) -> Result<Comment, AppError> {
    let comment = found(comments::find_one(pool, id).await)?;
    ensure_owner(comment, principal).map_err(|_| deny("comment", id, principal))
}

/// `/users/{id}` routes: a user only manages itself.
pub fn same_user(user_id: i64, principal: &AuthenticatedUser) -> Result<(), AppError> {
    if user_id == principal.id {
        Ok(())
    } else {
        Err(deny("user", user_id, principal))
    }
}
