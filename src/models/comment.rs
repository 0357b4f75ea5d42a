use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A comment. `user_id` mirrors the owner of `card_id` and is set on insert only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub card_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The parent card comes from the route. `cardId` may be repeated in the body,
/// in which case it has to name the same card.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub content: String,
    #[validate(range(min = 1, message = "Card ID must be greater than 0"))]
    pub card_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCommentInput {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub content: Option<String>,
}
