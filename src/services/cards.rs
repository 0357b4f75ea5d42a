use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        Card, CardWithComments, Comment, CreateCardInput, CreateCommentInput, UpdateCardInput,
        UpdateCommentInput,
    },
    services::{columns, comments},
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Card with ID {} not found", id))
}

/// Creates a card in one of `user_id`'s columns.
///
/// The column is looked up scoped to the caller, so a missing column and a
/// column owned by someone else both yield `NotFound`. The card's owner is
/// copied from the column.
pub async fn create(pool: &DbPool, user_id: i64, input: CreateCardInput) -> Result<Card, AppError> {
    let column = columns::find_for_user(pool, input.column_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Column with ID {} not found", input.column_id)))?;

    let now = Utc::now();
    let card = sqlx::query_as::<_, Card>(
        "INSERT INTO cards (title, description, column_id, user_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING id, title, description, column_id, user_id, created_at, updated_at",
    )
    .bind(input.title)
    .bind(input.description)
    .bind(column.id)
    .bind(column.user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    log::info!("created card {} in column {}", card.id, column.id);
    Ok(card)
}

/// Loads the card row alone. The card guard is built on this.
pub async fn find_one(pool: &DbPool, id: i64) -> Result<Card, AppError> {
    sqlx::query_as::<_, Card>(
        "SELECT id, title, description, column_id, user_id, created_at, updated_at
         FROM cards WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

/// Loads a card with its comments.
pub async fn get_by_id(pool: &DbPool, id: i64) -> Result<CardWithComments, AppError> {
    let card = find_one(pool, id).await?;
    let comments = comments::find_by_card(pool, id).await?;
    Ok(CardWithComments { card, comments })
}

pub async fn find_by_column(pool: &DbPool, column_id: i64) -> Result<Vec<Card>, AppError> {
    let cards = sqlx::query_as::<_, Card>(
        "SELECT id, title, description, column_id, user_id, created_at, updated_at
         FROM cards WHERE column_id = ? ORDER BY id",
    )
    .bind(column_id)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

/// Partial update, then re-fetch with comments.
pub async fn update(
    pool: &DbPool,
    id: i64,
    input: UpdateCardInput,
) -> Result<CardWithComments, AppError> {
    let result = sqlx::query(
        "UPDATE cards
         SET title = COALESCE(?, title), description = COALESCE(?, description), updated_at = ?
         WHERE id = ?",
    )
    .bind(input.title)
    .bind(input.description)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    get_by_id(pool, id).await
}

pub async fn delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM cards WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    log::info!("deleted card {}", id);
    Ok(())
}

pub async fn create_comment(
    pool: &DbPool,
    card_id: i64,
    input: CreateCommentInput,
) -> Result<Comment, AppError> {
    let card = find_one(pool, card_id).await?;
    comments::create(pool, &card, input).await
}

pub async fn get_comments(pool: &DbPool, card_id: i64) -> Result<Vec<Comment>, AppError> {
    Ok(get_by_id(pool, card_id).await?.comments)
}

/// Updates a comment only if it hangs off `card_id`.
pub async fn update_comment(
    pool: &DbPool,
    card_id: i64,
    comment_id: i64,
    input: UpdateCommentInput,
) -> Result<Comment, AppError> {
    find_one(pool, card_id).await?;

    sqlx::query_as::<_, Comment>(
        "UPDATE comments SET content = COALESCE(?, content), updated_at = ?
         WHERE id = ? AND card_id = ?
         RETURNING id, content, card_id, user_id, created_at, updated_at",
    )
    .bind(input.content)
    .bind(Utc::now())
    .bind(comment_id)
    .bind(card_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Comment with ID {} not found", comment_id)))
}

/// Deletes a comment only if it hangs off `card_id`.
pub async fn delete_comment(pool: &DbPool, card_id: i64, comment_id: i64) -> Result<(), AppError> {
    find_one(pool, card_id).await?;

    let result = sqlx::query("DELETE FROM comments WHERE id = ? AND card_id = ?")
        .bind(comment_id)
        .bind(card_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Comment with ID {} not found",
            comment_id
        )));
    }

    Ok(())
}
