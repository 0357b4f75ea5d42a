use crate::{
    auth::{generate_token, verify_password, AccessToken, LoginRequest, RegisterResponse},
    config::AuthConfig,
    db::DbPool,
    error::AppError,
    models::{CreateUserInput, User},
    services::users,
};

/// Creates the account and signs the new user in.
pub async fn register(
    pool: &DbPool,
    config: &AuthConfig,
    input: CreateUserInput,
) -> Result<RegisterResponse, AppError> {
    let user = users::create(pool, input, config.bcrypt_cost).await?;
    let access_token = generate_token(config, user.id, &user.email)?;

    Ok(RegisterResponse { access_token, user })
}

/// Returns the user if `password` matches the stored hash for `email`.
///
/// An unknown email and a wrong password both give `Ok(None)`.
pub async fn validate_user(
    pool: &DbPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    match users::find_by_email(pool, email).await? {
        Some(credentials) if verify_password(password, &credentials.password)? => {
            Ok(Some(credentials.user))
        }
        _ => Ok(None),
    }
}

pub async fn login(
    pool: &DbPool,
    config: &AuthConfig,
    input: LoginRequest,
) -> Result<AccessToken, AppError> {
    match validate_user(pool, &input.email, &input.password).await? {
        Some(user) => {
            log::info!("user {} logged in", user.id);
            Ok(AccessToken {
                access_token: generate_token(config, user.id, &user.email)?,
            })
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
