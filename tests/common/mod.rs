#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App,
};
use kanban_api::{
    auth::AuthMiddleware,
    config::AuthConfig,
    db::{self, DbPool},
    routes::{self, health},
};
use serde_json::{json, Value};

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expires_in: 3600,
        // Lowest cost bcrypt accepts, to keep the suite fast.
        bcrypt_cost: 4,
    }
}

pub async fn test_pool() -> DbPool {
    db::init_pool("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

/// The application as `main` builds it, minus CORS and access logging.
pub async fn test_app(
    pool: DbPool,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(test_auth_config()))
            .app_data(routes::json_config())
            .wrap(AuthMiddleware)
            .service(health::health)
            .configure(routes::config),
    )
    .await
}

/// Sends `req` and returns status and JSON body (`Value::Null` for an empty body).
///
/// Every rejection, including the ones raised by the auth middleware, has to
/// come back as a rendered response; an `Err` from the service fails the test.
pub async fn send<S>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub struct TestUser {
    pub id: i64,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }
}

/// Registers `email` and returns its id and access token.
pub async fn register_user<S>(app: &S, email: &str, password: &str) -> TestUser
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "register {}: {}", email, body);

    TestUser {
        id: body["user"]["id"].as_i64().expect("user id in register response"),
        token: body["accessToken"]
            .as_str()
            .expect("accessToken in register response")
            .to_string(),
    }
}

pub async fn create_column<S>(app: &S, user: &TestUser, name: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/columns", user.id))
        .insert_header(user.bearer())
        .set_json(json!({ "name": name }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create column: {}", body);
    body
}

pub async fn create_card<S>(app: &S, user: &TestUser, column_id: i64, title: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/cards")
        .insert_header(user.bearer())
        .set_json(json!({
            "title": title,
            "description": "...",
            "columnId": column_id
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create card: {}", body);
    body
}

pub async fn create_comment<S>(app: &S, user: &TestUser, card_id: i64, content: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/cards/{}/comments", card_id))
        .insert_header(user.bearer())
        .set_json(json!({ "content": content, "cardId": card_id }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create comment: {}", body);
    body
}
