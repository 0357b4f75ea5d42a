pub mod auth;
pub mod cards;
pub mod columns;
pub mod comments;
pub mod health;
pub mod users;

use actix_web::{error, web};

use crate::error::AppError;

/// Registers every resource scope. `/health` is registered separately so it
/// can sit outside any future prefix.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login),
    )
    .service(
        web::scope("/users")
            .service(users::create_user)
            .service(users::get_user)
            .service(users::update_user)
            .service(users::delete_user)
            .service(users::create_column)
            .service(users::get_columns)
            .service(users::update_column)
            .service(users::delete_column),
    )
    .service(
        web::scope("/columns")
            .service(columns::get_column)
            .service(columns::get_column_cards)
            .service(columns::update_column)
            .service(columns::delete_column),
    )
    .service(
        web::scope("/cards")
            .service(cards::create_card)
            .service(cards::get_card)
            .service(cards::update_card)
            .service(cards::delete_card)
            .service(cards::create_comment)
            .service(cards::get_comments)
            .service(cards::get_comments_by_card)
            .service(cards::update_comment)
            .service(cards::delete_comment),
    )
    .service(
        web::scope("/comments")
            .service(comments::get_comment)
            .service(comments::update_comment)
            .service(comments::delete_comment),
    );
}

/// JSON extractor settings: body parse failures use the same error shape as
/// every other `AppError`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::ContentType => "Expected a JSON body".to_string(),
            other => other.to_string(),
        };
        AppError::BadRequest(message).into()
    })
}
