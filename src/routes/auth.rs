use crate::{
    auth::LoginRequest,
    config::AuthConfig,
    db::DbPool,
    error::AppError,
    models::CreateUserInput,
    services,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates the account and returns `{accessToken, user}`.
///
/// ## Responses:
/// - `201 Created`: the account was created.
/// - `400 Bad Request`: malformed body, invalid email, password outside 6..=20
///   characters, or the email is already registered.
#[post("/register")]
pub async fn register(
    pool: web::Data<DbPool>,
    auth: web::Data<AuthConfig>,
    register_data: web::Json<CreateUserInput>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let response = services::auth::register(&pool, &auth, register_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// Login user
///
/// Checks the credentials and returns `{accessToken}`.
///
/// ## Responses:
/// - `200 OK`: credentials matched.
/// - `400 Bad Request`: malformed body or invalid email format.
/// - `401 Unauthorized`: unknown email or wrong password (same body for both).
#[post("/login")]
pub async fn login(
    pool: web::Data<DbPool>,
    auth: web::Data<AuthConfig>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let token = services::auth::login(&pool, &auth, login_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(token))
}
