use chrono::Utc;

use crate::{
    auth::hash_password,
    db::DbPool,
    error::AppError,
    models::{
        Column, CreateColumnInput, CreateUserInput, UpdateColumnInput, UpdateUserInput, User,
        UserCredentials, UserWithColumns,
    },
    services::columns,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User with ID {} not found", id))
}

fn email_taken() -> AppError {
    AppError::Conflict("Email already registered".into())
}

/// Creates a user, storing a bcrypt hash of the password.
///
/// The email is checked up front; the unique index on `users.email` catches
/// the concurrent case and maps to the same `Conflict`.
pub async fn create(
    pool: &DbPool,
    input: CreateUserInput,
    bcrypt_cost: u32,
) -> Result<User, AppError> {
    if find_by_email(pool, &input.email).await?.is_some() {
        return Err(email_taken());
    }

    let password_hash = hash_password(&input.password, bcrypt_cost)?;
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password, created_at, updated_at)
         VALUES (?, ?, ?, ?)
         RETURNING id, email, created_at, updated_at",
    )
    .bind(&input.email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    log::info!("registered user {}", user.id);
    Ok(user)
}

/// Looks a user up by email, including the password hash. Only the
/// credential check needs this.
pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<UserCredentials>, AppError> {
    let credentials = sqlx::query_as::<_, UserCredentials>(
        "SELECT id, email, password, created_at, updated_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(credentials)
}

pub async fn find_one(pool: &DbPool, id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT id, email, created_at, updated_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Loads a user together with its columns.
pub async fn get_by_id(pool: &DbPool, id: i64) -> Result<UserWithColumns, AppError> {
    let user = find_one(pool, id).await?;
    let columns = columns::find_by_user(pool, id).await?;
    Ok(UserWithColumns { user, columns })
}

/// Partial update. A new password is hashed before it is stored, and an email
/// already held by another user is a `Conflict`.
pub async fn update(
    pool: &DbPool,
    id: i64,
    input: UpdateUserInput,
    bcrypt_cost: u32,
) -> Result<UserWithColumns, AppError> {
    if let Some(email) = &input.email {
        if let Some(existing) = find_by_email(pool, email).await? {
            if existing.user.id != id {
                return Err(email_taken());
            }
        }
    }

    let password_hash = input
        .password
        .as_deref()
        .map(|password| hash_password(password, bcrypt_cost))
        .transpose()?;

    let result = sqlx::query(
        "UPDATE users
         SET email = COALESCE(?, email), password = COALESCE(?, password), updated_at = ?
         WHERE id = ?",
    )
    .bind(input.email)
    .bind(password_hash)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    get_by_id(pool, id).await
}

/// Deletes the user; columns, cards and comments follow through the cascades.
pub async fn delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    log::info!("deleted user {}", id);
    Ok(())
}

pub async fn create_column(
    pool: &DbPool,
    user_id: i64,
    input: CreateColumnInput,
) -> Result<Column, AppError> {
    find_one(pool, user_id).await?;
    columns::create(pool, user_id, input).await
}

pub async fn get_columns(pool: &DbPool, user_id: i64) -> Result<Vec<Column>, AppError> {
    Ok(get_by_id(pool, user_id).await?.columns)
}

/// Updates one of `user_id`'s columns; a column of another user is `NotFound`.
pub async fn update_column(
    pool: &DbPool,
    user_id: i64,
    column_id: i64,
    input: UpdateColumnInput,
) -> Result<Column, AppError> {
    let column = columns::find_for_user(pool, column_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Column with ID {} not found", column_id)))?;

    columns::update(pool, column.id, input).await
}

pub async fn delete_column(pool: &DbPool, user_id: i64, column_id: i64) -> Result<(), AppError> {
    columns::delete(pool, user_id, column_id).await
}
