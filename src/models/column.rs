use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The owning user comes from the route, never from the body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateColumnInput {
    #[validate(length(min = 1, max = 100, message = "Column name must be 1 to 100 characters"))]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateColumnInput {
    #[validate(length(min = 1, max = 100, message = "Column name must be 1 to 100 characters"))]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_input_validation() {
        assert!(CreateColumnInput { name: "To Do".into() }.validate().is_ok());
        assert!(CreateColumnInput { name: "".into() }.validate().is_err());
        assert!(CreateColumnInput { name: "x".repeat(101) }.validate().is_err());

        assert!(UpdateColumnInput { name: None }.validate().is_ok());
        assert!(UpdateColumnInput { name: Some("".into()) }.validate().is_err());
    }

    #[test]
    fn test_create_column_ignores_user_id_in_body() {
        let input: CreateColumnInput =
            serde_json::from_str(r#"{"name": "Done", "userId": 42}"#).unwrap();
        assert_eq!(input.name, "Done");
    }
}
