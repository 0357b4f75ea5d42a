use crate::{
    auth::AuthenticatedUser,
    config::AuthConfig,
    db::DbPool,
    error::AppError,
    guards,
    models::{CreateColumnInput, CreateUserInput, UpdateColumnInput, UpdateUserInput},
    services::users,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use validator::Validate;

/// Creates a user. Public, like `/auth/register`, but returns only the user.
///
/// ## Responses:
/// - `201 Created`: the new user (never includes the password).
/// - `400 Bad Request`: invalid input or email already registered.
#[post("")]
pub async fn create_user(
    pool: web::Data<DbPool>,
    auth: web::Data<AuthConfig>,
    user_data: web::Json<CreateUserInput>,
) -> Result<impl Responder, AppError> {
    user_data.validate()?;

    let user = users::create(&pool, user_data.into_inner(), auth.bcrypt_cost).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Returns the caller's own user record with its columns.
///
/// ## Responses:
/// - `200 OK`
/// - `401 Unauthorized`: missing token, or `id` is not the caller.
/// - `404 Not Found`: the caller's account no longer exists.
#[get("/{id}")]
pub async fn get_user(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user_id = path.into_inner();
    guards::same_user(user_id, &principal)?;

    let user = users::get_by_id(&pool, user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Partially updates the caller's email and/or password. A new password is
/// rehashed before it is stored.
#[patch("/{id}")]
pub async fn update_user(
    pool: web::Data<DbPool>,
    auth: web::Data<AuthConfig>,
    path: web::Path<i64>,
    user_data: web::Json<UpdateUserInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user_id = path.into_inner();
    guards::same_user(user_id, &principal)?;
    user_data.validate()?;

    let user = users::update(&pool, user_id, user_data.into_inner(), auth.bcrypt_cost).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Deletes the caller's account and, through the cascades, everything it owns.
#[delete("/{id}")]
pub async fn delete_user(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user_id = path.into_inner();
    guards::same_user(user_id, &principal)?;

    users::delete(&pool, user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/{user_id}/columns")]
pub async fn create_column(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    column_data: web::Json<CreateColumnInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user_id = path.into_inner();
    guards::same_user(user_id, &principal)?;
    column_data.validate()?;

    let column = users::create_column(&pool, user_id, column_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(column))
}

#[get("/{user_id}/columns")]
pub async fn get_columns(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user_id = path.into_inner();
    guards::same_user(user_id, &principal)?;

    let columns = users::get_columns(&pool, user_id).await?;

    Ok(HttpResponse::Ok().json(columns))
}

#[patch("/{user_id}/columns/{column_id}")]
pub async fn update_column(
    pool: web::Data<DbPool>,
    path: web::Path<(i64, i64)>,
    column_data: web::Json<UpdateColumnInput>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (user_id, column_id) = path.into_inner();
    guards::same_user(user_id, &principal)?;
    guards::owned_column(&pool, column_id, &principal).await?;
    column_data.validate()?;

    let column = users::update_column(&pool, user_id, column_id, column_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(column))
}

#[delete("/{user_id}/columns/{column_id}")]
pub async fn delete_column(
    pool: web::Data<DbPool>,
    path: web::Path<(i64, i64)>,
    principal: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let (user_id, column_id) = path.into_inner();
    guards::same_user(user_id, &principal)?;
    guards::owned_column(&pool, column_id, &principal).await?;

    users::delete_column(&pool, user_id, column_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
