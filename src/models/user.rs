use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::column::Column;

/// A user as returned by the API. The password hash is never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The row used by the credential check. Not serializable on purpose.
#[derive(Debug, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    /// bcrypt hash.
    pub password: String,
}

/// `GET /users/{id}` payload: the user with its columns relation loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithColumns {
    #[serde(flatten)]
    pub user: User,
    pub columns: Vec<Column>,
}

/// Payload for `POST /users` and `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, max = 20, message = "Password must be 6 to 20 characters"))]
    pub password: String,
}

/// Partial update: only the fields present in the payload are written.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 20, message = "Password must be 6 to 20 characters"))]
    pub password: Option<String>,
}
