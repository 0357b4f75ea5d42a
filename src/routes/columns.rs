use crate::{
    auth::AuthenticatedUser,
    db::DbPool,
    error::AppError,
    guards,
    models::UpdateColumnInput,
    services::{cards, columns},
};
use actix_web::{delete, get, patch, web, HttpResponse, Responder};
use validator::Validate;

/// Column addressed directly by id; every route runs the column guard first.
#[get("/{id}")]
pub async fn get_column(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let column = guards::owned_column(&pool, path.into_inner(), &principal).await?;

    Ok(HttpResponse::Ok().json(column))
}

#[get("/{id}/cards")]
pub async fn get_column_cards(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let column = guards::owned_column(&pool, path.into_inner(), &principal).await?;

    let cards = cards::find_by_column(&pool, column.id).await?;

    Ok(HttpResponse::Ok().json(cards))
}

#[patch("/{id}")]
pub async fn update_column(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    column_data: web::Json<UpdateColumnInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let column = guards::owned_column(&pool, path.into_inner(), &principal).await?;
    column_data.validate()?;

    let column = columns::update(&pool, column.id, column_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(column))
}

#[delete("/{id}")]
pub async fn delete_column(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let column = guards::owned_column(&pool, path.into_inner(), &principal).await?;

    columns::delete(&pool, principal.id, column.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
