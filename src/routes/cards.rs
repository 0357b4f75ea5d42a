use crate::{
    auth::AuthenticatedUser,
    db::DbPool,
    error::AppError,
    guards,
    models::{CreateCardInput, CreateCommentInput, UpdateCardInput, UpdateCommentInput},
    services::{cards, comments},
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use validator::Validate;

/// Creates a card in one of the caller's columns.
///
/// The card's owner is taken from the column; a `userId` in the body is ignored.
///
/// ## Responses:
/// - `201 Created`: the new card.
/// - `400 Bad Request`: invalid title, description or `columnId`.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: the column does not exist or is not the caller's.
#[post("")]
pub async fn create_card(
    pool: web::Data<DbPool>,
    card_data: web::Json<CreateCardInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    card_data.validate()?;

    let card = cards::create(&pool, principal.id, card_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(card))
}

/// Returns the card with its comments.
///
/// ## Responses:
/// - `200 OK`
/// - `401 Unauthorized`: missing token, or the card is absent or not the caller's.
#[get("/{id}")]
pub async fn get_card(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let card = guards::owned_card(&pool, path.into_inner(), &principal).await?;

    let card = cards::get_by_id(&pool, card.id).await?;

    Ok(HttpResponse::Ok().json(card))
}

/// Partially updates title and/or description.
#[patch("/{id}")]
pub async fn update_card(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    card_data: web::Json<UpdateCardInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let card = guards::owned_card(&pool, path.into_inner(), &principal).await?;
    card_data.validate()?;

    let card = cards::update(&pool, card.id, card_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(card))
}

#[delete("/{id}")]
pub async fn delete_card(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let card = guards::owned_card(&pool, path.into_inner(), &principal).await?;

    cards::delete(&pool, card.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Adds a comment to the card. The comment's owner is taken from the card.
#[post("/{id}/comments")]
pub async fn create_comment(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    comment_data: web::Json<CreateCommentInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let card = guards::owned_card(&pool, path.into_inner(), &principal).await?;
    comment_data.validate()?;

    let comment = cards::create_comment(&pool, card.id, comment_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(comment))
}

#[get("/{id}/comments")]
pub async fn get_comments(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let card = guards::owned_card(&pool, path.into_inner(), &principal).await?;

    let comments = cards::get_comments(&pool, card.id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Older form of `GET /cards/{id}/comments` that repeats the card id. Both ids
/// have to agree.
#[get("/{id}/comments/card/{card_id}")]
pub async fn get_comments_by_card(
    pool: web::Data<DbPool>,
    path: web::Path<(i64, i64)>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (id, card_id) = path.into_inner();
    let card = guards::owned_card(&pool, card_id, &principal).await?;
    if id != card.id {
        return Err(AppError::NotFound(format!("Card with ID {} not found", id)));
    }

    let comments = comments::find_by_card(&pool, card.id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Updates a comment of the card. Both the card and the comment guard run.
#[patch("/{card_id}/comments/{comment_id}")]
pub async fn update_comment(
    pool: web::Data<DbPool>,
    path: web::Path<(i64, i64)>,
    comment_data: web::Json<UpdateCommentInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (card_id, comment_id) = path.into_inner();
    guards::owned_card(&pool, card_id, &principal).await?;
    guards::owned_comment(&pool, comment_id, &principal).await?;
    comment_data.validate()?;

    let comment =
        cards::update_comment(&pool, card_id, comment_id, comment_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[delete("/{card_id}/comments/{comment_id}")]
pub async fn delete_comment(
    pool: web::Data<DbPool>,
    path: web::Path<(i64, i64)>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (card_id, comment_id) = path.into_inner();
    guards::owned_card(&pool, card_id, &principal).await?;
    guards::owned_comment(&pool, comment_id, &principal).await?;

    cards::delete_comment(&pool, card_id, comment_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
