use crate::{
    auth::AuthenticatedUser, db::DbPool, error::AppError, guards, models::UpdateCommentInput,
    services::comments,
};
use actix_web::{delete, get, patch, web, HttpResponse, Responder};
use validator::Validate;

#[get("/{id}")]
pub async fn get_comment(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let comment = guards::owned_comment(&pool, path.into_inner(), &principal).await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[patch("/{id}")]
pub async fn update_comment(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    comment_data: web::Json<UpdateCommentInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let comment = guards::owned_comment(&pool, path.into_inner(), &principal).await?;
    comment_data.validate()?;

    let comment = comments::update(&pool, comment.id, comment_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[delete("/{id}")]
pub async fn delete_comment(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let comment = guards::owned_comment(&pool, path.into_inner(), &principal).await?;

    comments::delete(&pool, comment.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
