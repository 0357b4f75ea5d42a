use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::{Card, Comment, CreateCommentInput, UpdateCommentInput},
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Comment with ID {} not found", id))
}

/// Adds a comment to `card`. The comment's owner is copied from the card.
pub async fn create(
    pool: &DbPool,
    card: &Card,
    input: CreateCommentInput,
) -> Result<Comment, AppError> {
    if let Some(card_id) = input.card_id {
        if card_id != card.id {
            return Err(AppError::ValidationError(format!(
                "cardId {} does not match card {}",
                card_id, card.id
            )));
        }
    }

    let now = Utc::now();
    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (content, card_id, user_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, content, card_id, user_id, created_at, updated_at",
    )
    .bind(input.content)
    .bind(card.id)
    .bind(card.user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    log::debug!("created comment {} on card {}", comment.id, card.id);
    Ok(comment)
}

pub async fn find_by_card(pool: &DbPool, card_id: i64) -> Result<Vec<Comment>, AppError> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, content, card_id, user_id, created_at, updated_at
         FROM comments WHERE card_id = ? ORDER BY id",
    )
    .bind(card_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Loads a comment by id regardless of owner. The comment guard is built on this.
pub async fn find_one(pool: &DbPool, id: i64) -> Result<Comment, AppError> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, content, card_id, user_id, created_at, updated_at FROM comments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

pub async fn update(
    pool: &DbPool,
    id: i64,
    input: UpdateCommentInput,
) -> Result<Comment, AppError> {
    sqlx::query_as::<_, Comment>(
        "UPDATE comments SET content = COALESCE(?, content), updated_at = ?
         WHERE id = ?
         RETURNING id, content, card_id, user_id, created_at, updated_at",
    )
    .bind(input.content)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

pub async fn delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    log::debug!("deleted comment {}", id);
    Ok(())
}
