use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::{Column, CreateColumnInput, UpdateColumnInput},
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Column with ID {} not found", id))
}

pub async fn find_by_user(pool: &DbPool, user_id: i64) -> Result<Vec<Column>, AppError> {
    let columns = sqlx::query_as::<_, Column>(
        "SELECT id, name, user_id, created_at, updated_at FROM columns WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(columns)
}

/// Loads a column by id regardless of owner. The column guard is built on this.
pub async fn find_one(pool: &DbPool, id: i64) -> Result<Column, AppError> {
    sqlx::query_as::<_, Column>(
        "SELECT id, name, user_id, created_at, updated_at FROM columns WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

/// Loads a column only if it belongs to `user_id`.
pub async fn find_for_user(
    pool: &DbPool,
    column_id: i64,
    user_id: i64,
) -> Result<Option<Column>, AppError> {
    let column = sqlx::query_as::<_, Column>(
        "SELECT id, name, user_id, created_at, updated_at FROM columns WHERE id = ? AND user_id = ?",
    )
    .bind(column_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(column)
}

pub async fn create(
    pool: &DbPool,
    user_id: i64,
    input: CreateColumnInput,
) -> Result<Column, AppError> {
    let now = Utc::now();
    let column = sqlx::query_as::<_, Column>(
        "INSERT INTO columns (name, user_id, created_at, updated_at)
         VALUES (?, ?, ?, ?)
         RETURNING id, name, user_id, created_at, updated_at",
    )
    .bind(input.name)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    log::info!("created column {} for user {}", column.id, user_id);
    Ok(column)
}

/// Partial update; fields left as `None` keep their stored value.
pub async fn update(pool: &DbPool, id: i64, input: UpdateColumnInput) -> Result<Column, AppError> {
    sqlx::query_as::<_, Column>(
        "UPDATE columns SET name = COALESCE(?, name), updated_at = ?
         WHERE id = ?
         RETURNING id, name, user_id, created_at, updated_at",
    )
    .bind(input.name)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

/// Deletes the column (and, through the foreign keys, its cards and their
/// comments) if it belongs to `user_id`.
pub async fn delete(pool: &DbPool, user_id: i64, column_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM columns WHERE id = ? AND user_id = ?")
        .bind(column_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Column with ID {} for user {} not found",
            column_id, user_id
        )));
    }

    log::info!("deleted column {} of user {}", column_id, user_id);
    Ok(())
}
