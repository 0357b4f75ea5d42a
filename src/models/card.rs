use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::comment::Comment;

/// A card. `user_id` mirrors the owner of `column_id` and is set on insert only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub column_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardWithComments {
    #[serde(flatten)]
    pub card: Card,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardInput {
    #[validate(length(min = 1, max = 100, message = "Card title must be 1 to 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 500, message = "Card description must be 1 to 500 characters"))]
    pub description: String,
    #[validate(range(min = 1, message = "Column ID must be greater than 0"))]
    pub column_id: i64,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCardInput {
    #[validate(length(min = 1, max = 100, message = "Card title must be 1 to 100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 500, message = "Card description must be 1 to 500 characters"))]
    pub description: Option<String>,
}
