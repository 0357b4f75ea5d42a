mod common;

use common::test_pool;
use kanban_api::{
    auth::verify_password,
    models::{
        CreateCardInput, CreateColumnInput, CreateCommentInput, CreateUserInput, UpdateColumnInput,
    },
    services::{cards, columns, comments, users},
    AppError,
};
use pretty_assertions::assert_eq;

async fn seed_user(pool: &kanban_api::db::DbPool, email: &str) -> i64 {
    let input = CreateUserInput {
        email: email.to_string(),
        password: "secret1".to_string(),
    };
    users::create(pool, input, 4).await.unwrap().id
}

#[actix_rt::test]
async fn test_stored_password_is_a_hash() {
    let pool = test_pool().await;
    seed_user(&pool, "hash@example.com").await;

    let credentials = users::find_by_email(&pool, "hash@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(credentials.password != "secret1");
    assert!(verify_password("secret1", &credentials.password).unwrap());
}

#[actix_rt::test]
async fn test_card_lookup_after_column_delete_is_not_found() {
    let pool = test_pool().await;
    let user_id = seed_user(&pool, "svc@example.com").await;

    let column = users::create_column(
        &pool,
        user_id,
        CreateColumnInput {
            name: "To Do".to_string(),
        },
    )
    .await
    .unwrap();
    let card = cards::create(
        &pool,
        user_id,
        CreateCardInput {
            title: "Task".to_string(),
            description: "...".to_string(),
            column_id: column.id,
        },
    )
    .await
    .unwrap();
    comments::create(
        &pool,
        &card,
        CreateCommentInput {
            content: "note".to_string(),
            card_id: None,
        },
    )
    .await
    .unwrap();

    users::delete_column(&pool, user_id, column.id).await.unwrap();

    assert!(matches!(
        cards::get_by_id(&pool, card.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(comments::find_by_card(&pool, card.id).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn test_column_operations_are_scoped_to_the_user() {
    let pool = test_pool().await;
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;

    let column = columns::create(
        &pool,
        owner,
        CreateColumnInput {
            name: "Mine".to_string(),
        },
    )
    .await
    .unwrap();

    let rename = UpdateColumnInput {
        name: Some("Theirs".to_string()),
    };
    assert!(matches!(
        users::update_column(&pool, other, column.id, rename).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        users::delete_column(&pool, other, column.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        cards::create(
            &pool,
            other,
            CreateCardInput {
                title: "t".to_string(),
                description: "d".to_string(),
                column_id: column.id,
            },
        )
        .await,
        Err(AppError::NotFound(_))
    ));

    assert_eq!(columns::find_one(&pool, column.id).await.unwrap().name, "Mine");
}

#[actix_rt::test]
async fn test_comment_card_id_must_match() {
    let pool = test_pool().await;
    let user_id = seed_user(&pool, "c@example.com").await;
    let column = columns::create(
        &pool,
        user_id,
        CreateColumnInput {
            name: "Col".to_string(),
        },
    )
    .await
    .unwrap();
    let card = cards::create(
        &pool,
        user_id,
        CreateCardInput {
            title: "t".to_string(),
            description: "d".to_string(),
            column_id: column.id,
        },
    )
    .await
    .unwrap();

    let result = comments::create(
        &pool,
        &card,
        CreateCommentInput {
            content: "x".to_string(),
            card_id: Some(card.id + 1),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn test_duplicate_email_is_conflict() {
    let pool = test_pool().await;
    seed_user(&pool, "dup@example.com").await;

    let result = users::create(
        &pool,
        CreateUserInput {
            email: "dup@example.com".to_string(),
            password: "secret1".to_string(),
        },
        4,
    )
    .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}
